//! listkit - client-side list derivation for application views
//!
//! CRM, commerce, mail and chat screens all turn a list of records into what
//! the user sees the same way: filter by a category, match a search query,
//! sort, and sometimes group into board columns or conversation days. This
//! library implements that pipeline once and configures it per entity.
//!
//! # Modules
//!
//! * [`config`] - Library configuration (view defaults, logging)
//! * [`derive`] - The derivation pipeline and its building blocks
//! * [`entities`] - Customer, deal, product, email, message and cart types
//! * [`source`] - The external data layer seen as a trait
//! * [`views`] - Per-view state driving the pipeline
//! * [`utils`] - Utility functions and helpers

/// Configuration module for view defaults and logging
pub mod config;

/// Shared constants and default values
pub mod constants;

/// Filter, search, sort and grouping pipeline
pub mod derive;

/// Entity types configured for the pipeline
pub mod entities;

/// Logging setup built on fern
pub mod logger;

/// Data-source abstraction and an in-memory implementation
pub mod source;

/// Utility functions for date/time handling
pub mod utils;

/// View state for list, board and conversation panels
pub mod views;

pub use derive::{derive_board, derive_list, CategoryFilter, FilterState, Record, SortKey};
