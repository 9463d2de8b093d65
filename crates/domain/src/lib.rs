//! nrdbot domain types.
//!
//! Pure data and lookup tables shared by the lookup pipeline:
//!
//! - `query` - forceful-mode detection and query normalization
//! - `shorthand` / `colors` - read-only tables loaded once at startup
//! - `card` - classified search results and extracted card fields
//! - `message` - the outbound chat message shape
//! - `messages` - user-facing response phrases

pub mod card;
pub mod colors;
pub mod error;
pub mod message;
pub mod messages;
pub mod query;
pub mod shorthand;

pub use card::{Candidate, CardInfo, ClassifiedResult};
pub use colors::ColorTable;
pub use error::TableError;
pub use message::{Attachment, OutboundMessage};
pub use messages::ResponseMessages;
pub use query::{NormalizedQuery, FORCEFUL_MARKER};
pub use shorthand::ShorthandTable;
