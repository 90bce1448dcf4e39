//! The in-memory transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    transaction::core::{NewTransaction, Transaction, TransactionId},
};

/// Holds every transaction created since the server started, in insertion order.
///
/// Cloning the store is cheap and every clone refers to the same underlying list.
/// All operations take a single lock, so IDs are allocated exactly once and
/// readers never observe a partially created transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    ledger: Arc<Mutex<Ledger>>,
}

#[derive(Debug)]
struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }
}

impl TransactionStore {
    /// Create an empty store. The first transaction will get the ID 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all transactions in the order they were created.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn list(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.transactions.clone())
    }

    /// Store `new_transaction` under the next unused ID and return the stored transaction.
    ///
    /// IDs are never reused, even after the transaction holding one is deleted.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn create(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut ledger = self.lock()?;

        let id = ledger.next_id;
        ledger.next_id += 1;

        let transaction = new_transaction.finalise(id);
        ledger.transactions.push(transaction.clone());

        Ok(transaction)
    }

    /// Get the transaction with the ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no transaction with the ID `id`,
    /// or [Error::StoreLockError] if the lock is poisoned.
    pub fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.lock()?
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::TransactionNotFound)
    }

    /// Remove the transaction with the ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no transaction with the ID `id`,
    /// or [Error::StoreLockError] if the lock is poisoned.
    pub fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let mut ledger = self.lock()?;

        let position = ledger
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::TransactionNotFound)?;
        ledger.transactions.remove(position);

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.ledger.lock().map_err(|_| Error::StoreLockError)
    }
}
