//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - The in-memory `TransactionStore`
//! - Route handlers for the `/api/transactions` endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod list_endpoint;
mod store;

pub use core::{NewTransaction, Transaction, TransactionId};
pub use create_endpoint::{CREATED_MESSAGE, TransactionCreated, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use store::TransactionStore;
