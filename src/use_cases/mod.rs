// Use cases layer: application workflows for the scoreboard server.

pub mod catalog;
pub mod engine;

pub use catalog::{CatalogError, QuestionCatalog, QuestionSummary};
pub use engine::{AwardOutcome, GameEngine, NextRoundOutcome, SelectOutcome};
