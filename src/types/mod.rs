pub mod matching;
pub mod turn;

pub use matching::{Candidate, Query, ScoreDetails};
pub use turn::{HistoryTurn, Role, TurnOutcome};
