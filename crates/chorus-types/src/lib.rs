//! Shared domain types for Chorus.
//!
//! This crate contains the core domain types used across the Chorus proxy:
//! conversation turns, personas, generation outcomes, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod generate;
pub mod persona;
