// Game engine: one operation per external command, mutating the single
// board state and consulting the question bank. Operations are
// all-or-nothing; every failure is detected before any field changes.

use crate::domain::{Answer, GameError, GameState, Team, default_question};
use crate::use_cases::catalog::{QuestionCatalog, QuestionSummary};

/// Result of a select command.
#[derive(Debug)]
pub struct SelectOutcome {
    pub answer: Answer,
    pub newly_revealed: bool,
    pub round_score: u32,
}

/// Result of an award or steal command.
#[derive(Debug)]
pub struct AwardOutcome {
    pub awarded: u32,
    pub to: Team,
}

/// Result of the bank-then-advance composite.
#[derive(Debug)]
pub struct NextRoundOutcome {
    pub question_id: u32,
    pub awarded_points: u32,
    pub team1_score: i64,
    pub team2_score: i64,
}

/// The sole mutation gateway for the board. Handlers translate transport
/// payloads into these calls and never touch [`GameState`] directly.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    catalog: QuestionCatalog,
}

impl GameEngine {
    /// Opens the board on the first bank question, or the built-in one when
    /// the bank is empty.
    pub fn new(catalog: QuestionCatalog) -> Self {
        let opening = catalog.first().cloned().unwrap_or_else(default_question);
        Self {
            state: GameState::from_question(&opening),
            catalog,
        }
    }

    /// Read-only snapshot of the live board.
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Reveals an answer. The outcome distinguishes a fresh reveal (scored)
    /// from a repeat (no score change) so callers can present both.
    pub fn select_answer(&mut self, answer_id: u32) -> Result<SelectOutcome, GameError> {
        let reveal = self.state.reveal_answer(answer_id)?;
        Ok(SelectOutcome {
            answer: reveal.answer,
            newly_revealed: reveal.newly_revealed,
            round_score: self.state.round_score,
        })
    }

    pub fn reset_board(&mut self) {
        self.state.reset_round();
    }

    /// Loads a question: an explicit id jumps directly (unknown ids are
    /// rejected), no id advances cyclically through the bank.
    pub fn new_question(&mut self, requested: Option<u32>) -> Result<u32, GameError> {
        let question = match requested {
            Some(question_id) => self
                .catalog
                .by_id(question_id)
                .ok_or(GameError::QuestionNotFound { question_id })?,
            None => self
                .catalog
                .next_after(self.state.question_id)
                .ok_or(GameError::NoQuestions)?,
        };

        let loaded_id = question.id;
        self.state.load_question(question);
        Ok(loaded_id)
    }

    /// Banks the round score to the team in control, then advances to the
    /// next bank question. Always auto-advances; an empty bank fails before
    /// anything is banked.
    pub fn next_round(&mut self) -> Result<NextRoundOutcome, GameError> {
        let question = self
            .catalog
            .next_after(self.state.question_id)
            .ok_or(GameError::NoQuestions)?;

        let awarded_points = self.state.award();
        let question_id = question.id;
        self.state.load_question(question);

        Ok(NextRoundOutcome {
            question_id,
            awarded_points,
            team1_score: self.state.team1_score,
            team2_score: self.state.team2_score,
        })
    }

    pub fn set_active_team(&mut self, team: Team) -> u8 {
        self.state.set_active_team(team);
        team.index()
    }

    /// Overwrites one team total; returns both totals for the response.
    pub fn set_team_score(&mut self, team: Team, score: i64) -> (i64, i64) {
        self.state.set_team_score(team, score);
        (self.state.team1_score, self.state.team2_score)
    }

    pub fn add_strike(&mut self) -> u8 {
        self.state.add_strike()
    }

    pub fn clear_strikes(&mut self) -> u8 {
        self.state.clear_strikes();
        self.state.strikes
    }

    pub fn award(&mut self) -> AwardOutcome {
        let to = self.state.active_team;
        AwardOutcome {
            awarded: self.state.award(),
            to,
        }
    }

    pub fn award_steal(&mut self) -> AwardOutcome {
        let (awarded, to) = self.state.award_steal();
        AwardOutcome { awarded, to }
    }

    pub fn list_questions(&self) -> Vec<QuestionSummary> {
        self.catalog.summaries()
    }
}
