//! # Assistant Module
//!
//! Rule-based farming assistant behind the chat widget.
//!
//! ## Components
//! - `intent`: ordered keyword rules and the responder
//! - `catalog`: canned replies and quick prompts
//! - `conversation`: transient per-session message history

pub mod catalog;
pub mod conversation;
pub mod intent;

pub use catalog::{ResponseCatalog, QUICK_PROMPTS, WELCOME_MESSAGE};
pub use conversation::Conversation;
pub use intent::{respond, Intent, IntentMatch, IntentResponder, IntentRule};
