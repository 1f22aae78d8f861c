//! Banks domain module.
//!
//! Holds the `Bank` entity and the `BankDataSource` contract that owns every
//! bank record, plus the in-memory implementation used by the API.

pub mod bank;
pub mod datasource;
pub mod in_memory;
pub mod seed;

pub use bank::Bank;
pub use datasource::BankDataSource;
pub use in_memory::InMemoryBankDataSource;
pub use seed::sample_banks;
