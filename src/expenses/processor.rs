use crate::expenses::error::ExpenseError;
use crate::expenses::processor_enums::{ExpenseProcessorInput, ExpenseProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<ExpenseProcessorOutput, ExpenseError> for ExpenseProcessorInput {
    async fn process(&self, app_config: &AppConfig) -> Result<ExpenseProcessorOutput, ExpenseError> {
        let store = app_config.store.as_ref();

        match self {
            ExpenseProcessorInput::ListExpenses => {
                tracing::debug!("Fetching all expenses");
                let expenses = store.list().inspect_err(|e| {
                    tracing::error!("Database error while listing expenses: {}", e);
                })?;
                tracing::debug!("Found {} expenses", expenses.len());

                Ok(ExpenseProcessorOutput::ListExpenses(expenses))
            }
            ExpenseProcessorInput::CreateExpense(raw) => {
                tracing::debug!("Received expense data: {:?}", raw);
                let new_expense = raw.validate().inspect_err(|e| {
                    tracing::error!("Rejected expense: {}", e);
                })?;

                let record = store.insert(new_expense).inspect_err(|e| {
                    tracing::error!("Error adding expense: {}", e);
                })?;
                tracing::info!("Successfully added expense: {:?}", record);

                Ok(ExpenseProcessorOutput::CreateExpense(record))
            }
            ExpenseProcessorInput::DeleteExpense(expense_id) => {
                tracing::debug!("Attempting to delete expense with ID: {}", expense_id);
                store.delete(*expense_id).inspect_err(|e| {
                    tracing::error!("Error deleting expense {}: {}", expense_id, e);
                })?;
                tracing::info!("Successfully deleted expense with ID: {}", expense_id);

                Ok(ExpenseProcessorOutput::DeleteExpense)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::{memory::MemoryExpenseStore, validation::RawExpenseInput};
    use serde_json::json;
    use std::sync::Arc;

    fn raw(amount: serde_json::Value, category: &str, date: &str) -> RawExpenseInput {
        RawExpenseInput {
            amount: Some(amount),
            category: Some(json!(category)),
            date: Some(json!(date)),
            description: None,
        }
    }

    async fn create(app_config: &AppConfig, input: RawExpenseInput) -> Result<i32, ExpenseError> {
        match ExpenseProcessorInput::CreateExpense(input).process(app_config).await? {
            ExpenseProcessorOutput::CreateExpense(record) => Ok(record.id),
            other => panic!("unexpected output {:?}", other),
        }
    }

    async fn list(app_config: &AppConfig) -> Vec<crate::expenses::db_types::ExpenseRecord> {
        match ExpenseProcessorInput::ListExpenses.process(app_config).await.unwrap() {
            ExpenseProcessorOutput::ListExpenses(records) => records,
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_is_date_descending() {
        let app_config = AppConfig::new(Arc::new(MemoryExpenseStore::new()));
        create(&app_config, raw(json!(1), "A", "2024-01-10")).await.unwrap();
        create(&app_config, raw(json!(2), "B", "2024-03-01")).await.unwrap();
        create(&app_config, raw(json!(3), "C", "2023-12-31")).await.unwrap();

        let dates: Vec<String> = list(&app_config)
            .await
            .iter()
            .map(|r| r.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-01-10", "2023-12-31"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let app_config = AppConfig::new(Arc::new(MemoryExpenseStore::new()));
        let first = create(&app_config, raw(json!(1), "A", "2024-01-10")).await.unwrap();
        let second = create(&app_config, raw(json!(2), "B", "2024-01-11")).await.unwrap();

        ExpenseProcessorInput::DeleteExpense(second)
            .process(&app_config)
            .await
            .unwrap();
        let third = create(&app_config, raw(json!(3), "C", "2024-01-12")).await.unwrap();

        assert!(third > second && second > first);
        let ids: Vec<i32> = list(&app_config).await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third, first]);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_store() {
        let store = Arc::new(MemoryExpenseStore::new());
        let app_config = AppConfig::new(store.clone());

        let result = create(&app_config, raw(json!("abc"), "Food", "2024-01-15")).await;
        assert!(matches!(result, Err(ExpenseError::Validation(_))));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let app_config = AppConfig::new(Arc::new(MemoryExpenseStore::new()));
        let result = ExpenseProcessorInput::DeleteExpense(99)
            .process(&app_config)
            .await;
        assert!(matches!(result, Err(ExpenseError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let app_config = AppConfig::new(Arc::new(MemoryExpenseStore::unavailable()));
        let result = ExpenseProcessorInput::ListExpenses.process(&app_config).await;
        assert!(matches!(result, Err(ExpenseError::Storage(_))));
    }
}
