use std::sync::Mutex;

use crate::expenses::{
    db_types::{CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, ExpenseRecord, NewExpense},
    error::ExpenseError,
    store::ExpenseStore,
};

/// In-process store for tests. Mirrors the column limits and id sequence of the table.
#[derive(Default)]
pub struct MemoryExpenseStore {
    state: Mutex<MemoryState>,
    unavailable: bool,
}

#[derive(Default)]
struct MemoryState {
    rows: Vec<ExpenseRecord>,
    last_id: i32,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like an unreachable database.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|state| state.rows.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, ExpenseError> {
        if self.unavailable {
            return Err(ExpenseError::storage("connection refused"));
        }
        self.state
            .lock()
            .map_err(|_| ExpenseError::storage("store lock poisoned"))
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>, ExpenseError> {
        let mut rows = self.lock()?.rows.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    fn insert(&self, expense: NewExpense) -> Result<ExpenseRecord, ExpenseError> {
        let mut state = self.lock()?;

        if expense.category.chars().count() > CATEGORY_MAX_LEN {
            return Err(ExpenseError::storage(format!(
                "value too long for type character varying({})",
                CATEGORY_MAX_LEN
            )));
        }
        if expense.description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ExpenseError::storage(format!(
                "value too long for type character varying({})",
                DESCRIPTION_MAX_LEN
            )));
        }

        state.last_id += 1;
        let record = expense.into_record(state.last_id);
        state.rows.push(record.clone());
        Ok(record)
    }

    fn delete(&self, expense_id: i32) -> Result<(), ExpenseError> {
        let mut state = self.lock()?;
        let before = state.rows.len();
        state.rows.retain(|row| row.id != expense_id);
        if state.rows.len() == before {
            return Err(ExpenseError::NotFound(expense_id));
        }
        Ok(())
    }
}
