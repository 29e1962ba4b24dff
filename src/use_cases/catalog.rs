// Ordered, in-memory question bank and its on-disk JSON document.

use crate::domain::{Answer, Question};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

// Document shape of the question bank file.
#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: u32,
    question: String,
    answers: Vec<AnswerRecord>,
}

#[derive(Debug, Deserialize)]
struct AnswerRecord {
    id: u32,
    text: String,
    points: u32,
}

#[derive(Debug)]
pub enum CatalogError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Read(err) => write!(f, "question bank read error: {err}"),
            CatalogError::Parse(err) => write!(f, "question bank parse error: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Spoiler-free projection of a bank entry for listings.
#[derive(Debug, Clone)]
pub struct QuestionSummary {
    pub id: u32,
    pub prompt: String,
    pub answer_count: usize,
}

/// The question bank in bank-file order.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Reads the bank document from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(CatalogError::Read)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let bank: BankFile = serde_json::from_str(raw).map_err(CatalogError::Parse)?;

        let questions = bank
            .questions
            .into_iter()
            .map(|record| Question {
                id: record.id,
                prompt: record.question,
                answers: record
                    .answers
                    .into_iter()
                    .map(|answer| Answer {
                        id: answer.id,
                        text: answer.text,
                        points: answer.points,
                        revealed: false,
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn first(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn by_id(&self, question_id: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    /// Cyclic successor by bank position, not id arithmetic, so gaps and
    /// unsorted ids behave predictably. The last (or an unknown) id wraps to
    /// the front. `None` only for an empty bank.
    pub fn next_after(&self, question_id: u32) -> Option<&Question> {
        let position = self
            .questions
            .iter()
            .position(|question| question.id == question_id);

        match position {
            Some(index) if index + 1 < self.questions.len() => self.questions.get(index + 1),
            _ => self.questions.first(),
        }
    }

    /// Listing projection; answer texts and points stay out of it.
    pub fn summaries(&self) -> Vec<QuestionSummary> {
        self.questions
            .iter()
            .map(|question| QuestionSummary {
                id: question.id,
                prompt: question.prompt.clone(),
                answer_count: question.answers.len(),
            })
            .collect()
    }
}
