//! Functional core for the inventory handlers.
//!
//! Everything in this crate is pure: request envelopes, field resolution,
//! validation, numeric coercion, response shaping and the storage contract.
//! The I/O lives in the `inventory` binary crate.

pub mod gateway;
pub mod inventory;
pub mod storage;
