//! Read-side derivation over the task collection.
//!
//! # Responsibility
//! - Compute the visible, filtered list and the global status counts from
//!   the authoritative state plus transient query input.
//!
//! # Invariants
//! - Projection never reorders; visible tasks keep collection order.
//! - Counts are computed over the unfiltered collection.

pub mod projection;
