pub mod memory;
pub mod mongo;
pub mod query;
pub mod store;
