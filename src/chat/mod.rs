//! Conversational interpreter: recognition lexicon, transaction extraction,
//! and intent routing for chat input.

pub mod extract;
pub mod lexicon;
pub mod router;

pub use extract::{extract, MissingField, ParseResult};
pub use router::{BotReply, ChatRouter, ReplyKind};
