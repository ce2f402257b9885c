pub mod db_types;
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod processor;
pub mod processor_enums;
pub mod store;
pub mod validation;
