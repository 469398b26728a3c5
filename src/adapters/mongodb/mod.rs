//! MongoDB adapter
//!
//! This module provides the MongoDB implementation of the applicant store:
//! a thin client wrapper, the wire-format document models, and the
//! `ApplicantStore` trait implementation.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::MongoStore;
pub use client::MongoStoreClient;
