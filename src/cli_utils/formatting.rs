use colored::Colorize;

use crate::expenses::db_types::ExpenseRecord;

/// Format a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths = column_widths(&headers, &rows);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.len()));

    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.len(), usize::max)
        })
        .collect()
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn expense_rows(expenses: &[ExpenseRecord]) -> Vec<Vec<String>> {
    expenses
        .iter()
        .map(|expense| {
            vec![
                expense.id.to_string(),
                expense.date.to_string(),
                expense.category.clone(),
                if expense.description.is_empty() {
                    "-".to_string()
                } else {
                    expense.description.clone()
                },
                format_amount(expense.amount),
            ]
        })
        .collect()
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.len()));
    println!();
}

/// Format a count
pub fn format_count(label: &str, count: usize) -> String {
    format!("{}: {}", label, count.to_string().bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_expense_rows() {
        let expenses = vec![ExpenseRecord {
            id: 7,
            amount: 3.5,
            category: "Coffee".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            description: String::new(),
        }];

        assert_eq!(
            expense_rows(&expenses),
            vec![vec!["7", "2024-04-02", "Coffee", "-", "$3.50"]]
        );
    }

    #[test]
    fn test_column_widths_cover_longest_cell() {
        let rows = vec![vec!["1".to_string(), "Groceries".to_string()]];
        assert_eq!(column_widths(&["ID", "Category"], &rows), vec![2, 9]);
    }
}
