use crate::schema::expenses as ExpensesTable;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

pub const CATEGORY_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// A stored expense. Serializes to the wire shape directly, `date` as `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRecord {
    pub id: i32,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// A validated expense that has not been assigned an id yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl NewExpense {
    pub fn into_record(self, id: i32) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_wire_shape() {
        let record = NewExpense {
            amount: 42.5,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: String::new(),
        }
        .into_record(1);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": 1,
                "amount": 42.5,
                "category": "Food",
                "date": "2024-01-05",
                "description": ""
            })
        );
    }
}
