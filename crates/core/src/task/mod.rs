//! Task module
//!
//! Task types, the status state machine, and the persisted store.

mod file_store;
mod model;
mod repository;

pub use file_store::FileTaskStore;
pub use model::*;
pub use repository::TaskRepository;
