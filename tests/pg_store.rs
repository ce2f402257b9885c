//! Runs against a real Postgres database:
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`

use chrono::NaiveDate;
use expense_tracker::expenses::{
    db_types::NewExpense,
    error::ExpenseError,
    store::{ExpenseStore, PgExpenseStore},
};
use expense_tracker::utils::db::{DbConfig, build_pool, ensure_schema};

fn store() -> PgExpenseStore {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let db_config = DbConfig {
        db_user: String::new(),
        db_password: String::new(),
        db_host: String::new(),
        db_port: 5432,
        db_name: String::new(),
        db_pool_size: 2,
        database_url: Some(url),
    };
    let pool = build_pool(&db_config).unwrap();
    ensure_schema(&pool).unwrap();
    PgExpenseStore::new(pool)
}

fn expense(category: &str, date: (i32, u32, u32)) -> NewExpense {
    NewExpense {
        amount: 12.75,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        description: String::new(),
    }
}

#[test]
#[ignore]
fn test_insert_list_delete() {
    let store = store();

    let older = store.insert(expense("pg-test-older", (2001, 1, 1))).unwrap();
    let newer = store.insert(expense("pg-test-newer", (2001, 6, 1))).unwrap();
    assert!(newer.id > older.id);
    assert_eq!(newer.amount, 12.75);

    let listed: Vec<i32> = store
        .list()
        .unwrap()
        .into_iter()
        .filter(|e| e.category.starts_with("pg-test-"))
        .map(|e| e.id)
        .collect();
    let newer_pos = listed.iter().position(|id| *id == newer.id).unwrap();
    let older_pos = listed.iter().position(|id| *id == older.id).unwrap();
    assert!(newer_pos < older_pos);

    store.delete(older.id).unwrap();
    store.delete(newer.id).unwrap();
    assert!(matches!(store.delete(newer.id), Err(ExpenseError::NotFound(_))));
}

#[test]
#[ignore]
fn test_over_long_category_rolls_back() {
    let store = store();
    let before = store.list().unwrap().len();

    let result = store.insert(expense(&"x".repeat(51), (2001, 1, 1)));
    assert!(matches!(result, Err(ExpenseError::Storage(_))));
    assert_eq!(store.list().unwrap().len(), before);
}
