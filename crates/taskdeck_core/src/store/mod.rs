//! Task store: command union and the authoritative reducer.
//!
//! # Responsibility
//! - Define the closed set of mutation intents ([`command::Command`]).
//! - Apply them through one total transition function
//!   ([`task_store::TaskStore::apply`]).
//!
//! # Invariants
//! - Every command produces a new collection value; input state is never
//!   mutated in place.
//! - Invalid commands are no-ops, not errors.

pub mod command;
pub mod task_store;
