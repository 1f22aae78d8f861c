use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bankapi_core::{DomainError, DomainResult, Entity};

use crate::bank::Bank;
use crate::datasource::BankDataSource;
use crate::seed::sample_banks;

/// In-memory bank store for tests/dev.
///
/// Records are kept in insertion order. Reads share the lock; every mutation
/// holds the write lock for its whole lookup-and-modify step.
#[derive(Debug, Default)]
pub struct InMemoryBankDataSource {
    inner: RwLock<Vec<Bank>>,
}

impl InMemoryBankDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with [`sample_banks`].
    pub fn seeded() -> Self {
        Self::with_banks(sample_banks())
    }

    /// Build a store from `banks`, keeping the first record for any repeated
    /// account number.
    pub fn with_banks(banks: impl IntoIterator<Item = Bank>) -> Self {
        let mut records: Vec<Bank> = Vec::new();
        for bank in banks {
            if !records.iter().any(|b| b.id() == bank.id()) {
                records.push(bank);
            }
        }
        Self {
            inner: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-applied record, so
    // poisoned guards are safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Bank>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Bank>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BankDataSource for InMemoryBankDataSource {
    fn retrieve_banks(&self) -> Vec<Bank> {
        self.read().clone()
    }

    fn retrieve_bank(&self, account_number: &str) -> DomainResult<Bank> {
        self.read()
            .iter()
            .find(|b| b.account_number == account_number)
            .cloned()
            .ok_or_else(|| DomainError::not_found(account_number))
    }

    fn create_bank(&self, bank: Bank) -> DomainResult<Bank> {
        let mut banks = self.write();
        if banks.iter().any(|b| b.id() == bank.id()) {
            tracing::debug!(account_number = %bank.account_number, "bank already exists");
            return Err(DomainError::already_exists(bank.account_number));
        }
        tracing::debug!(account_number = %bank.account_number, "bank created");
        banks.push(bank.clone());
        Ok(bank)
    }

    fn update_bank(&self, bank: Bank) -> DomainResult<Bank> {
        let mut banks = self.write();
        let Some(current) = banks
            .iter_mut()
            .find(|b| b.id() == bank.id())
        else {
            tracing::debug!(account_number = %bank.account_number, "bank to update not found");
            return Err(DomainError::not_found(bank.account_number));
        };
        current.trust = bank.trust;
        current.transaction_fee = bank.transaction_fee;
        tracing::debug!(account_number = %current.account_number, "bank updated");
        Ok(current.clone())
    }

    fn delete_bank(&self, account_number: &str) -> DomainResult<()> {
        let mut banks = self.write();
        let Some(pos) = banks.iter().position(|b| b.account_number == account_number) else {
            tracing::debug!(account_number, "bank to delete not found");
            return Err(DomainError::not_found(account_number));
        };
        banks.remove(pos);
        tracing::debug!(account_number, "bank deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    fn test_bank(account_number: &str) -> Bank {
        Bank::new(account_number, 31.415, 2)
    }

    #[test]
    fn seeded_store_lists_sample_banks_in_order() {
        let store = InMemoryBankDataSource::seeded();
        let numbers: Vec<_> = store
            .retrieve_banks()
            .into_iter()
            .map(|b| b.account_number)
            .collect();
        assert_eq!(numbers, vec!["1234", "1010", "5678"]);
    }

    #[test]
    fn with_banks_keeps_first_of_duplicates() {
        let store = InMemoryBankDataSource::with_banks([
            Bank::new("1", 1.0, 1),
            Bank::new("1", 2.0, 2),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.retrieve_bank("1").unwrap().trust, 1.0);
    }

    #[test]
    fn retrieve_bank_returns_matching_record() {
        let store = InMemoryBankDataSource::seeded();
        let bank = store.retrieve_bank("1234").unwrap();
        assert_eq!(bank.trust, 3.14);
        assert_eq!(bank.transaction_fee, 17);
    }

    #[test]
    fn retrieve_missing_bank_is_not_found() {
        let store = InMemoryBankDataSource::seeded();
        let err = store.retrieve_bank("does_not_exist").unwrap_err();
        assert_eq!(err, DomainError::not_found("does_not_exist"));
    }

    #[test]
    fn create_echoes_and_stores_bank() {
        let store = InMemoryBankDataSource::new();
        let created = store.create_bank(test_bank("abc123")).unwrap();
        assert_eq!(created, test_bank("abc123"));
        assert_eq!(store.retrieve_bank("abc123").unwrap(), created);
    }

    #[test]
    fn create_duplicate_is_rejected_and_store_unchanged() {
        let store = InMemoryBankDataSource::seeded();
        let before = store.retrieve_banks();

        let err = store.create_bank(Bank::new("1234", 1.0, 1)).unwrap_err();

        assert_eq!(err, DomainError::already_exists("1234"));
        assert_eq!(store.retrieve_banks(), before);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let store = InMemoryBankDataSource::seeded();
        let updated = store.update_bank(Bank::new("1234", 1.0, 1)).unwrap();

        assert_eq!(updated, Bank::new("1234", 1.0, 1));
        assert_eq!(store.retrieve_bank("1234").unwrap(), updated);
        // position is preserved
        assert_eq!(store.retrieve_banks()[0].account_number, "1234");
    }

    #[test]
    fn update_missing_bank_is_not_found() {
        let store = InMemoryBankDataSource::seeded();
        let before = store.retrieve_banks();

        let err = store.update_bank(test_bank("does_not_exist")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.retrieve_banks(), before);
    }

    #[test]
    fn delete_removes_bank() {
        let store = InMemoryBankDataSource::seeded();
        store.delete_bank("1234").unwrap();
        assert!(store.retrieve_bank("1234").unwrap_err().is_not_found());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_missing_bank_is_not_found() {
        let store = InMemoryBankDataSource::new();
        assert!(store.delete_bank("nope").unwrap_err().is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_creates_of_same_account_admit_exactly_one() {
        let store = Arc::new(InMemoryBankDataSource::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.create_bank(Bank::new("shared", i as f64, i)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn arc_handle_forwards_to_inner_store() {
        let store: Arc<dyn BankDataSource> = Arc::new(InMemoryBankDataSource::seeded());
        let shared = Arc::clone(&store);
        shared.delete_bank("1010").unwrap();
        assert!(store.retrieve_bank("1010").is_err());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(Bank),
        Update(Bank),
        Delete(String),
    }

    fn account() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(String::from)
    }

    fn bank() -> impl Strategy<Value = Bank> {
        (account(), -100.0f64..100.0, 0i64..1_000).prop_map(|(a, t, f)| Bank::new(a, t, f))
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            bank().prop_map(Op::Create),
            bank().prop_map(Op::Update),
            account().prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of operations the store lists exactly
        /// the live records of a plain ordered model, each once.
        #[test]
        fn store_matches_ordered_model(ops in prop::collection::vec(op(), 0..40)) {
            let store = InMemoryBankDataSource::new();
            let mut model: Vec<Bank> = Vec::new();

            for op in ops {
                match op {
                    Op::Create(b) => {
                        let exists = model.iter().any(|m| m.account_number == b.account_number);
                        let res = store.create_bank(b.clone());
                        if exists {
                            prop_assert_eq!(res, Err(DomainError::already_exists(b.account_number.clone())));
                        } else {
                            prop_assert_eq!(res, Ok(b.clone()));
                            model.push(b);
                        }
                    }
                    Op::Update(b) => {
                        let res = store.update_bank(b.clone());
                        match model.iter_mut().find(|m| m.account_number == b.account_number) {
                            Some(m) => {
                                m.trust = b.trust;
                                m.transaction_fee = b.transaction_fee;
                                prop_assert_eq!(res, Ok(b));
                            }
                            None => prop_assert!(res.unwrap_err().is_not_found()),
                        }
                    }
                    Op::Delete(a) => {
                        let res = store.delete_bank(&a);
                        match model.iter().position(|m| m.account_number == a) {
                            Some(pos) => {
                                model.remove(pos);
                                prop_assert_eq!(res, Ok(()));
                                prop_assert!(store.retrieve_bank(&a).unwrap_err().is_not_found());
                            }
                            None => prop_assert!(res.unwrap_err().is_not_found()),
                        }
                    }
                }
            }

            prop_assert_eq!(store.retrieve_banks(), model);
        }
    }
}
