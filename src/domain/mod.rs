// Domain layer: board state, teams and game rules.

pub mod errors;
pub mod state;

pub use errors::GameError;
pub use state::{Answer, GameState, MAX_STRIKES, Question, RevealOutcome, Team, default_question};
