// Chatbot sessions on top of the FAQ matcher.
//
// Each Discord user gets an append-only transcript that lives until the
// session is ended or the bot restarts. Nothing here is persisted.

use super::faq_matcher::{FaqMatcher, MatchOutcome};
use dashmap::DashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// What the bot said back, plus which question it matched (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub matched_question: Option<String>,
    pub score: Option<f64>,
}

pub struct ChatService {
    matcher: FaqMatcher,
    // User ID -> transcript
    sessions: DashMap<u64, Vec<ChatTurn>>,
}

impl ChatService {
    pub fn new(matcher: FaqMatcher) -> Self {
        Self {
            matcher,
            sessions: DashMap::new(),
        }
    }

    /// Answer a question and record both sides of the exchange.
    pub fn ask(&self, user_id: u64, text: &str) -> ChatReply {
        let outcome = self.matcher.answer(text);
        let (matched_question, score) = match &outcome {
            MatchOutcome::Hit(hit) => (Some(hit.question.to_string()), Some(hit.score)),
            MatchOutcome::Fallback => (None, None),
        };
        let reply = ChatReply {
            text: outcome.reply().to_string(),
            matched_question,
            score,
        };

        tracing::debug!(
            user_id,
            matched = reply.matched_question.as_deref().unwrap_or("<fallback>"),
            "FAQ lookup"
        );

        let mut transcript = self.sessions.entry(user_id).or_default();
        transcript.push(ChatTurn {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        transcript.push(ChatTurn {
            speaker: Speaker::Bot,
            text: reply.text.clone(),
        });

        reply
    }

    pub fn history(&self, user_id: u64) -> Vec<ChatTurn> {
        self.sessions
            .get(&user_id)
            .map(|turns| turns.clone())
            .unwrap_or_default()
    }

    /// Drop the user's transcript. Returns how many turns were discarded.
    pub fn end_session(&self, user_id: u64) -> usize {
        self.sessions
            .remove(&user_id)
            .map(|(_, turns)| turns.len())
            .unwrap_or(0)
    }
}
