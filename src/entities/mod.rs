//! Per-entity configuration of the derivation pipeline.
//!
//! Each entity declares which of its fields are searchable, which one is its
//! category, and what it sorts by. Display fallback chains live next to the
//! entity that owns them.

pub mod cart;
pub mod customer;
pub mod deal;
pub mod email;
pub mod message;
pub mod product;

pub use cart::{Cart, CartLine, CartSummary};
pub use customer::{Customer, CustomerStatus};
pub use deal::{deal_board, Deal, DealStage};
pub use email::{unread_counts, Email, Folder};
pub use message::Message;
pub use product::Product;
