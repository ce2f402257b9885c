use diesel::prelude::*;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::expenses::{
    db_types::{ExpenseRecord, NewExpense},
    error::ExpenseError,
};
use crate::schema::expenses as ExpensesTable;
use crate::utils::db::get_conn;

/// Durable persistence for expenses. Every call is its own transaction.
pub trait ExpenseStore: Send + Sync {
    /// All expenses, most recent date first.
    fn list(&self) -> Result<Vec<ExpenseRecord>, ExpenseError>;

    /// Persists the expense and returns it with its assigned id.
    fn insert(&self, expense: NewExpense) -> Result<ExpenseRecord, ExpenseError>;

    /// Fails with `NotFound` when no expense has this id.
    fn delete(&self, expense_id: i32) -> Result<(), ExpenseError>;
}

pub struct PgExpenseStore {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl PgExpenseStore {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }
}

impl ExpenseStore for PgExpenseStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>, ExpenseError> {
        use crate::schema::expenses::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        let results = expenses
            .order(date.desc())
            .then_order_by(id.desc())
            .select(ExpenseRecord::as_select())
            .load(&mut conn)?;

        Ok(results)
    }

    fn insert(&self, expense: NewExpense) -> Result<ExpenseRecord, ExpenseError> {
        let mut conn = get_conn(&self.pool)?;

        conn.transaction::<_, ExpenseError, _>(|conn| {
            let record = diesel::insert_into(ExpensesTable::table)
                .values(&expense)
                .returning(ExpenseRecord::as_returning())
                .get_result(conn)?;
            Ok(record)
        })
    }

    fn delete(&self, expense_id: i32) -> Result<(), ExpenseError> {
        use crate::schema::expenses::dsl::*;
        let mut conn = get_conn(&self.pool)?;

        conn.transaction::<_, ExpenseError, _>(|conn| {
            let removed = diesel::delete(expenses.filter(id.eq(expense_id))).execute(conn)?;
            if removed == 0 {
                return Err(ExpenseError::NotFound(expense_id));
            }
            Ok(())
        })
    }
}
