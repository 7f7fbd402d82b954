//! Business logic for the Chorus persona chat proxy.
//!
//! This crate defines the in-memory session store, the persona registry,
//! the prompt composer, and the chat/compare orchestration service. The
//! downstream generation call is a "port": the [`generate::provider::GenerationProvider`]
//! trait is defined here and implemented by `chorus-infra` -- this crate
//! never depends on `chorus-infra` or any HTTP crate.

pub mod chat;
pub mod generate;
pub mod persona;
pub mod prompt;
pub mod session;
