use serde::{Deserialize, Serialize};

use crate::expenses::{db_types::ExpenseRecord, validation::RawExpenseInput};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ExpenseProcessorInput {
    ListExpenses,
    CreateExpense(RawExpenseInput),
    DeleteExpense(i32),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ExpenseProcessorOutput {
    ListExpenses(Vec<ExpenseRecord>),
    CreateExpense(ExpenseRecord),
    DeleteExpense,
}
