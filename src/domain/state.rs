// Board state and the mutators that keep it consistent.

use crate::domain::errors::GameError;

/// Strikes never climb past this; further strikes are ignored.
pub const MAX_STRIKES: u8 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub id: u32,
    pub text: String,
    pub points: u32,
    pub revealed: bool,
}

/// A bank entry. Immutable once loaded; the live board works on a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub answers: Vec<Answer>,
}

/// One of the two competing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// Parses the wire representation; anything but 1 or 2 is rejected.
    pub fn from_index(value: i64) -> Result<Team, GameError> {
        match value {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            _ => Err(GameError::InvalidTeam { value }),
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// Result of a reveal attempt on the live board.
#[derive(Debug)]
pub struct RevealOutcome {
    pub answer: Answer,
    pub newly_revealed: bool,
}

/// The single mutable aggregate behind the whole game.
///
/// One instance lives for the whole server process and is only ever touched
/// through the engine, under one lock.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub question_id: u32,
    pub prompt: String,
    pub answers: Vec<Answer>,
    pub last_selected: Option<Answer>,
    pub strikes: u8,
    pub round_score: u32,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: i64,
    pub team2_score: i64,
    pub active_team: Team,
}

impl GameState {
    /// Fresh board for a question, with default team setup.
    pub fn from_question(question: &Question) -> Self {
        Self {
            question_id: question.id,
            prompt: question.prompt.clone(),
            answers: hidden_copy(&question.answers),
            last_selected: None,
            strikes: 0,
            round_score: 0,
            team1_name: "Team 1".to_string(),
            team2_name: "Team 2".to_string(),
            team1_score: 0,
            team2_score: 0,
            active_team: Team::One,
        }
    }

    /// Clears the current board: hides every answer, drops the last selection
    /// and zeroes the round score. Strikes survive a plain reset; they clear
    /// only via `clear_strikes` or when a new question loads.
    pub fn reset_round(&mut self) {
        for answer in &mut self.answers {
            answer.revealed = false;
        }
        self.last_selected = None;
        self.round_score = 0;
    }

    /// Reveals an answer and scores it into the round. Revealing an already
    /// revealed answer leaves the board untouched and scores nothing.
    pub fn reveal_answer(&mut self, answer_id: u32) -> Result<RevealOutcome, GameError> {
        let answer = self
            .answers
            .iter_mut()
            .find(|answer| answer.id == answer_id)
            .ok_or(GameError::AnswerNotFound { answer_id })?;

        if answer.revealed {
            return Ok(RevealOutcome {
                answer: answer.clone(),
                newly_revealed: false,
            });
        }

        answer.revealed = true;
        let answer = answer.clone();
        self.round_score += answer.points;
        self.last_selected = Some(answer.clone());

        Ok(RevealOutcome {
            answer,
            newly_revealed: true,
        })
    }

    /// Adds a strike, saturating at [`MAX_STRIKES`]. Returns the new count.
    pub fn add_strike(&mut self) -> u8 {
        if self.strikes < MAX_STRIKES {
            self.strikes += 1;
        }
        self.strikes
    }

    pub fn clear_strikes(&mut self) {
        self.strikes = 0;
    }

    pub fn set_active_team(&mut self, team: Team) {
        self.active_team = team;
    }

    /// Direct overwrite of a team total (judge correction path).
    pub fn set_team_score(&mut self, team: Team, score: i64) {
        match team {
            Team::One => self.team1_score = score,
            Team::Two => self.team2_score = score,
        }
    }

    /// Banks the round score into the active team's total. Returns the
    /// banked amount; banking an empty round changes nothing.
    pub fn award(&mut self) -> u32 {
        let amount = self.round_score;
        if amount == 0 {
            return 0;
        }
        self.add_points(self.active_team, amount);
        self.round_score = 0;
        amount
    }

    /// Banks the round score into the team that is NOT in control, and
    /// reports who received it.
    pub fn award_steal(&mut self) -> (u32, Team) {
        let to = self.active_team.opponent();
        let amount = self.round_score;
        if amount == 0 {
            return (0, to);
        }
        self.add_points(to, amount);
        self.round_score = 0;
        (amount, to)
    }

    /// Replaces the board with a fresh copy of `question`: all answers
    /// hidden, selection cleared, round score and strikes zeroed.
    pub fn load_question(&mut self, question: &Question) {
        self.question_id = question.id;
        self.prompt = question.prompt.clone();
        self.answers = hidden_copy(&question.answers);
        self.last_selected = None;
        self.round_score = 0;
        self.strikes = 0;
    }

    fn add_points(&mut self, team: Team, amount: u32) {
        match team {
            Team::One => self.team1_score += i64::from(amount),
            Team::Two => self.team2_score += i64::from(amount),
        }
    }
}

fn hidden_copy(answers: &[Answer]) -> Vec<Answer> {
    answers
        .iter()
        .cloned()
        .map(|mut answer| {
            answer.revealed = false;
            answer
        })
        .collect()
}

/// Built-in board used when the question bank is empty or unreadable, so the
/// game is always playable.
pub fn default_question() -> Question {
    let answers = [
        (1, "Toothbrush", 30),
        (2, "Sunscreen", 25),
        (3, "Passport", 20),
        (4, "Camera", 15),
        (5, "Clothes", 10),
    ];

    Question {
        id: 1,
        prompt: "Name something you take on vacation".to_string(),
        answers: answers
            .into_iter()
            .map(|(id, text, points)| Answer {
                id,
                text: text.to_string(),
                points,
                revealed: false,
            })
            .collect(),
    }
}
