//! Utility modules shared by the derivation pipeline and the entities.
//!
//! - [`datetime`] - timestamp parsing, conversion to sortable milliseconds and
//!   locale-independent day keys

pub mod datetime;
