use crate::error::DeckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl Operator {
    /// Fixed presentation order of the answer controls.
    pub const ALL: [Operator; 3] = [
        Operator::Equal,
        Operator::LessOrEqual,
        Operator::GreaterOrEqual,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| op.glyph() == s)
            .ok_or_else(|| format!("unknown operator '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "left")]
    pub left_label: String,
    #[serde(rename = "right")]
    pub right_label: String,
    #[serde(rename = "correct")]
    pub correct_operator: Operator,
    #[serde(rename = "correct_msg")]
    pub correct_message: String,
    #[serde(rename = "incorrect_msg")]
    pub incorrect_message: String,
}

/// A named, ordered, non-empty list of questions.
#[derive(Debug, Clone)]
pub struct Deck {
    pub(crate) name: String,
    pub(crate) questions: Vec<Question>,
}

impl Deck {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, DeckError> {
        if questions.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self {
            name: name.into(),
            questions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Panics if `index` is out of range. Use [`Deck::get`] for untrusted indices.
    pub fn question(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

/// Per-session quiz progress. `attempted` is derived from the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizState {
    pub(crate) current_index: usize,
    pub(crate) score: usize,
    pub(crate) selected_operator: Option<Operator>,
    pub(crate) finished: bool,
}

impl QuizState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_operator(&self) -> Option<Operator> {
        self.selected_operator
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn attempted(&self) -> bool {
        self.selected_operator.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished { score: self.score }
        } else {
            Phase::InProgress {
                current_index: self.current_index,
                attempted: self.attempted(),
                selected_operator: self.selected_operator,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress {
        current_index: usize,
        attempted: bool,
        selected_operator: Option<Operator>,
    },
    Finished {
        score: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    OperatorChosen(Operator),
    Advance,
    Restart,
}

#[derive(Debug)]
pub struct QuizSession {
    pub deck: Deck,
    pub state: QuizState,
    /// Index into `Operator::ALL` of the keyboard-focused control.
    pub focused_operator: usize,
    pub shuffle: bool,
}

impl QuizSession {
    pub fn new(deck: Deck, shuffle: bool) -> Self {
        Self {
            deck,
            state: QuizState::default(),
            focused_operator: 0,
            shuffle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuizQuitConfirm,
    Summary,
}
