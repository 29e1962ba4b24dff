// Domain-level errors for board commands.
#[derive(Debug)]
pub enum GameError {
    AnswerNotFound { answer_id: u32 },
    QuestionNotFound { question_id: u32 },
    NoQuestions,
    InvalidTeam { value: i64 },
}
