use crate::models::{Deck, Operator, QuizState};
use crate::quiz::{Feedback, feedback_for};

pub const HINT: &str = "Try any option. You can change your mind before moving on.";
pub const NEXT_LABEL: &str = "Next →";
pub const FINISH_LABEL: &str = "Finish";
pub const PLAY_AGAIN_LABEL: &str = "Play again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorControl {
    pub operator: Operator,
    pub glyph: &'static str,
    pub selected: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub progress_text: String,
    pub progress_ratio: f64,
    pub left_label: &'a str,
    pub right_label: &'a str,
    pub operators: [OperatorControl; 3],
    pub feedback: Option<Feedback<'a>>,
    pub advance_label: &'static str,
    pub advance_enabled: bool,
    pub hint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryView {
    pub score: usize,
    pub total: usize,
}

impl SummaryView {
    pub fn score_text(&self) -> String {
        format!("Score: {} / {}", self.score, self.total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Card(CardView<'a>),
    Summary(SummaryView),
}

/// Pure function of its inputs, so the UI can redraw from scratch after every transition.
pub fn render<'a>(deck: &'a Deck, state: &QuizState) -> View<'a> {
    let total = deck.len();
    if state.finished {
        return View::Summary(SummaryView {
            score: state.score,
            total,
        });
    }

    // A state carried over from a longer deck shows the last card.
    let index = state.current_index.min(total.saturating_sub(1));
    let question = deck.question(index);
    let operators = Operator::ALL.map(|operator| OperatorControl {
        operator,
        glyph: operator.glyph(),
        selected: state.selected_operator == Some(operator),
        enabled: true,
    });
    let advance_label = if index + 1 == total {
        FINISH_LABEL
    } else {
        NEXT_LABEL
    };

    View::Card(CardView {
        progress_text: format!("{} / {}", index + 1, total),
        progress_ratio: index as f64 / total as f64,
        left_label: &question.left_label,
        right_label: &question.right_label,
        operators,
        feedback: feedback_for(state, question),
        advance_label,
        advance_enabled: state.attempted(),
        hint: HINT,
    })
}
