//! Constants used throughout the library
//!
//! This module centralizes sentinels, default values, fixed bucket orders and
//! log message text so views and entities agree on them.

// Filter sentinels
/// Category value that means "no category filter"
pub const CATEGORY_ALL: &str = "all";

// Defaults
/// Default window for grouping consecutive chat messages from the same sender
pub const DEFAULT_MESSAGE_GROUP_WINDOW_MINUTES: i64 = 5;
/// Upper bound accepted for the message grouping window (24 hours)
pub const MAX_MESSAGE_GROUP_WINDOW_MINUTES: i64 = 1440;
/// Locale-independent day key format used by day bucketing
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
/// Default log level when logging is enabled
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Fixed bucket orders
/// Deal stages in board (kanban) column order
pub const DEAL_STAGES: [&str; 6] = ["lead", "qualified", "proposal", "negotiation", "closed-won", "closed-lost"];
/// Email folders in sidebar order
pub const EMAIL_FOLDERS: [&str; 6] = ["inbox", "sent", "drafts", "archive", "spam", "trash"];

// Log Messages
pub const LOG_LOADED_RECORDS: &str = "Loaded records into view";
pub const LOG_CREATED_RECORD: &str = "Created record";
pub const LOG_UPDATED_RECORD: &str = "Updated record";
pub const LOG_DELETED_RECORD: &str = "Deleted record";
pub const LOG_ERROR_LOAD_RECORDS: &str = "Failed to load records";
pub const LOG_ERROR_CREATE_RECORD: &str = "Failed to create record";
pub const LOG_ERROR_UPDATE_RECORD: &str = "Failed to update record";
pub const LOG_ERROR_DELETE_RECORD: &str = "Failed to delete record";
pub const LOG_STALE_SNAPSHOT: &str = "Keeping previous records after failed reload";

// Config
pub const CONFIG_FILE_NAME: &str = "listkit.toml";
pub const CONFIG_DIR_NAME: &str = "listkit";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
