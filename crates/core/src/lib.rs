//! Pure domain logic for the dayroom tracker.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API server, and the nook scheduler alike.

pub mod dates;
pub mod error;
pub mod habits;
pub mod ordering;
pub mod patch;
pub mod types;
