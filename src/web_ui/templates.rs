pub fn base_layout(content: &str) -> String {
    format!(
        r##"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Expense Tracker</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        .delete-btn {{ cursor: pointer; color: #dc2626; }}
        .delete-btn:hover {{ color: #991b1b; }}
    </style>
</head>
<body class="bg-gray-100 text-gray-800 font-sans antialiased">
    <div class="max-w-4xl mx-auto py-10 px-4">
        {content}
    </div>
    <script src="/static/script.js"></script>
</body>
</html>
"##
    )
}

pub fn index_page() -> String {
    base_layout(
        r##"
        <h1 class="text-3xl font-bold mb-6"><i class="fas fa-wallet"></i> Expense Tracker</h1>

        <form id="expenseForm" class="bg-white shadow rounded p-6 mb-8 grid grid-cols-1 md:grid-cols-2 gap-4">
            <label class="flex flex-col">Amount
                <input id="amount" type="number" step="0.01" min="0" required class="border rounded p-2">
            </label>
            <label class="flex flex-col">Category
                <select id="category" required class="border rounded p-2">
                    <option value="Food">Food</option>
                    <option value="Transport">Transport</option>
                    <option value="Housing">Housing</option>
                    <option value="Utilities">Utilities</option>
                    <option value="Entertainment">Entertainment</option>
                    <option value="Health">Health</option>
                    <option value="Other">Other</option>
                </select>
            </label>
            <label class="flex flex-col">Date
                <input id="date" type="date" required class="border rounded p-2">
            </label>
            <label class="flex flex-col">Description
                <input id="description" type="text" maxlength="200" class="border rounded p-2">
            </label>
            <button type="submit" class="md:col-span-2 bg-blue-600 text-white rounded p-2 hover:bg-blue-700">
                <i class="fas fa-plus"></i> Add Expense
            </button>
        </form>

        <table class="w-full bg-white shadow rounded">
            <thead class="bg-gray-200 text-left">
                <tr>
                    <th class="p-2">Date</th>
                    <th class="p-2">Category</th>
                    <th class="p-2">Description</th>
                    <th class="p-2">Amount</th>
                    <th class="p-2"></th>
                </tr>
            </thead>
            <tbody id="expensesList"></tbody>
        </table>
        "##,
    )
}

pub const SCRIPT: &str = r##"
const field = (id) => document.getElementById(id);

function resetDate() {
    field('date').valueAsDate = new Date();
}

function escapeHtml(text) {
    const div = document.createElement('div');
    div.textContent = text;
    return div.innerHTML;
}

async function loadExpenses() {
    try {
        const response = await fetch('/api/expenses');
        const expenses = await response.json();
        const list = field('expensesList');
        list.innerHTML = '';

        for (const expense of expenses) {
            const row = document.createElement('tr');
            row.className = 'border-t';
            row.innerHTML = `
                <td class="p-2">${expense.date}</td>
                <td class="p-2">${escapeHtml(expense.category)}</td>
                <td class="p-2">${escapeHtml(expense.description || '-')}</td>
                <td class="p-2">$${Number(expense.amount).toFixed(2)}</td>
                <td class="p-2">
                    <span class="delete-btn" data-id="${expense.id}"><i class="fas fa-trash"></i> Delete</span>
                </td>`;
            list.appendChild(row);
        }
    } catch (error) {
        console.error('Error loading expenses:', error);
    }
}

async function deleteExpense(id) {
    if (!confirm('Are you sure you want to delete this expense?')) {
        return;
    }
    try {
        const response = await fetch(`/api/expenses/${id}`, { method: 'DELETE' });
        if (response.ok) {
            loadExpenses();
        } else {
            const body = await response.json();
            alert('Error deleting expense: ' + body.error);
        }
    } catch (error) {
        alert('Error deleting expense: ' + error.message);
    }
}

document.addEventListener('DOMContentLoaded', () => {
    resetDate();
    loadExpenses();

    field('expensesList').addEventListener('click', (event) => {
        const button = event.target.closest('.delete-btn');
        if (button) {
            deleteExpense(button.dataset.id);
        }
    });

    field('expenseForm').addEventListener('submit', async (event) => {
        event.preventDefault();
        const payload = {
            amount: field('amount').value,
            category: field('category').value,
            date: field('date').value,
            description: field('description').value,
        };

        try {
            const response = await fetch('/api/expenses', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(payload),
            });
            if (response.ok) {
                field('expenseForm').reset();
                resetDate();
                loadExpenses();
            } else {
                const body = await response.json();
                alert('Error adding expense: ' + body.error);
            }
        } catch (error) {
            alert('Error adding expense: ' + error.message);
        }
    });
});
"##;
