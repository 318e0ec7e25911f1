use crate::error::QuizError;
use crate::models::{Deck, Operator, Question, QuizEvent, QuizState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub message: &'a str,
    pub correct: bool,
}

pub fn is_correct(selected: Operator, correct: Operator) -> bool {
    selected == correct
}

/// The single message to show for the current attempt, if any.
pub fn feedback_for<'a>(state: &QuizState, question: &'a Question) -> Option<Feedback<'a>> {
    let selected = state.selected_operator?;
    let correct = is_correct(selected, question.correct_operator);
    let message = if correct {
        question.correct_message.as_str()
    } else {
        question.incorrect_message.as_str()
    };
    Some(Feedback { message, correct })
}

impl QuizState {
    /// Records `op` as the current selection. May be called any number of times
    /// before advancing; only the last selection is scored.
    pub fn choose_operator(&mut self, op: Operator) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::Finished);
        }
        self.selected_operator = Some(op);
        Ok(())
    }

    /// Scores the current question and moves on, or finishes after the last one.
    pub fn advance(&mut self, deck: &Deck) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::Finished);
        }
        let selected = self.selected_operator.ok_or(QuizError::NotAttempted)?;

        let question = deck
            .get(self.current_index)
            .ok_or(QuizError::NoQuestion(self.current_index))?;
        if is_correct(selected, question.correct_operator) {
            self.score += 1;
        }

        if self.current_index + 1 >= deck.len() {
            self.finished = true;
        } else {
            self.current_index += 1;
            self.selected_operator = None;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = QuizState::default();
    }

    /// Applies `event` to a copy of the state. Events the current state does not
    /// accept leave it unchanged.
    pub fn transition(self, deck: &Deck, event: QuizEvent) -> QuizState {
        let mut next = self;
        let result = match event {
            QuizEvent::OperatorChosen(op) => next.choose_operator(op),
            QuizEvent::Advance => next.advance(deck),
            QuizEvent::Restart => {
                next.reset();
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                tracing::debug!(?event, from = ?self, to = ?next, "quiz transition");
                next
            }
            Err(e) => {
                tracing::debug!(?event, error = %e, "quiz event ignored");
                self
            }
        }
    }
}
