use std::sync::Arc;

use bankapi_core::DomainResult;

use crate::bank::Bank;

/// Owner of all bank records.
///
/// Implementations enforce that account numbers are unique and that a record
/// exists before it is read, updated or deleted. Every call is atomic.
pub trait BankDataSource: Send + Sync {
    /// All banks, in insertion order.
    fn retrieve_banks(&self) -> Vec<Bank>;
    fn retrieve_bank(&self, account_number: &str) -> DomainResult<Bank>;
    /// Fails with `AlreadyExists` if the account number is taken.
    fn create_bank(&self, bank: Bank) -> DomainResult<Bank>;
    /// Replaces trust and fee of the matching record. Fails with `NotFound`.
    fn update_bank(&self, bank: Bank) -> DomainResult<Bank>;
    fn delete_bank(&self, account_number: &str) -> DomainResult<()>;
}

impl<S> BankDataSource for Arc<S>
where
    S: BankDataSource + ?Sized,
{
    fn retrieve_banks(&self) -> Vec<Bank> {
        (**self).retrieve_banks()
    }

    fn retrieve_bank(&self, account_number: &str) -> DomainResult<Bank> {
        (**self).retrieve_bank(account_number)
    }

    fn create_bank(&self, bank: Bank) -> DomainResult<Bank> {
        (**self).create_bank(bank)
    }

    fn update_bank(&self, bank: Bank) -> DomainResult<Bank> {
        (**self).update_bank(bank)
    }

    fn delete_bank(&self, account_number: &str) -> DomainResult<()> {
        (**self).delete_bank(account_number)
    }
}
