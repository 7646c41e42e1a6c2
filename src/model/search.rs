//! Search pipeline states

use super::media::ResultCard;

/// Why the result area is empty
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// Query too short to send.
    StartTyping,
    /// The backend found nothing for the query.
    NoMatches,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::StartTyping => "Start typing to search.",
            EmptyReason::NoMatches => "No results found.",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Pending,
    Results {
        generation: u64,
        cards: Vec<ResultCard>,
    },
    Empty(EmptyReason),
    Error {
        reason: String,
    },
}

impl SearchState {
    pub const UNAVAILABLE: &'static str = "Search unavailable right now.";

    /// Text for the empty-state area; `None` when it should be hidden.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            SearchState::Idle => Some(EmptyReason::StartTyping.message()),
            SearchState::Empty(reason) => Some(reason.message()),
            SearchState::Error { .. } => Some(Self::UNAVAILABLE),
            SearchState::Pending | SearchState::Results { .. } => None,
        }
    }

    pub fn cards(&self) -> &[ResultCard] {
        match self {
            SearchState::Results { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SearchState::Pending)
    }
}
