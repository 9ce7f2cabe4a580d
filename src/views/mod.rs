//! View state for list, board and conversation panels.
//!
//! A view owns a snapshot of records and the parameters the user picked, and
//! produces derived output on demand. Nothing here is shared between views.

pub mod conversation;
pub mod list_view;

pub use conversation::ConversationView;
pub use list_view::ListView;
