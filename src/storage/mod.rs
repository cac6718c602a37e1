//! Storage layer for wellb.
//!
//! This module persists the full date-key to record mapping as a single
//! JSON document, loaded wholesale at startup and rewritten wholesale
//! after every mutation.

mod store;

pub use store::{WellnessStore, STORE_FILE_NAME};
