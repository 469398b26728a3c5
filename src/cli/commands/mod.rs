//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod assign;
pub mod init;
pub mod validate;
