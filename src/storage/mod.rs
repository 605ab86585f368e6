//! Hands a submitted record from the entry view to the confirmation view

mod error;
mod file_store;
mod traits;
mod transfer;

pub use error::StorageError;
pub use file_store::FileStore;
pub use traits::TransferStore;
pub use transfer::{load_confirmation, return_to_form, submit_and_transfer, SubmitOutcome};

#[cfg(test)]
pub use traits::MockTransferStore;
