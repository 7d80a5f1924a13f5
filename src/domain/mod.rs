pub mod transaction;

pub use transaction::{NewTransaction, Status, Transaction, TransitionError, TransitionEvent};
