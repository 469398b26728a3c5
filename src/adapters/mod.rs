//! External integrations
//!
//! This module contains the store abstraction and its adapters:
//! the MongoDB adapter used in production and an in-memory adapter
//! used by tests.

pub mod memory;
pub mod mongodb;
pub mod store;

pub use memory::InMemoryStore;
pub use mongodb::{MongoStore, MongoStoreClient};
pub use store::traits::{ApplicantStore, UpdateCounts};
