// FAQ chatbot: catalog, fuzzy matcher and per-user chat sessions.

pub mod chat_service;
pub mod faq_catalog;
pub mod faq_matcher;

pub use chat_service::{ChatReply, ChatService, ChatTurn, Speaker};
pub use faq_catalog::default_faq;
pub use faq_matcher::{FaqEntry, FaqMatcher, MatchOutcome, DEFAULT_THRESHOLD, FALLBACK_ANSWER};
