use crate::deck::shuffle_questions;
use crate::models::{AppState, Operator, QuizEvent, QuizSession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Routes a key press to the handler for the current screen.
pub fn handle_key(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) -> InputOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputOutcome::Quit;
    }

    match *app_state {
        AppState::Quiz => {
            handle_quiz_input(session, key, app_state);
            InputOutcome::Continue
        }
        AppState::QuizQuitConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => InputOutcome::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                *app_state = AppState::Quiz;
                InputOutcome::Continue
            }
            _ => InputOutcome::Continue,
        },
        AppState::Summary => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => {
                restart(session, app_state);
                InputOutcome::Continue
            }
            KeyCode::Char('q') | KeyCode::Esc => InputOutcome::Quit,
            _ => InputOutcome::Continue,
        },
    }
}

fn operator_for_key(code: KeyCode) -> Option<Operator> {
    match code {
        KeyCode::Char('1') | KeyCode::Char('=') => Some(Operator::Equal),
        KeyCode::Char('2') | KeyCode::Char('<') => Some(Operator::LessOrEqual),
        KeyCode::Char('3') | KeyCode::Char('>') => Some(Operator::GreaterOrEqual),
        _ => None,
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    let operator_count = Operator::ALL.len();

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Left | KeyCode::BackTab => {
            session.focused_operator = (session.focused_operator + operator_count - 1) % operator_count;
        }
        KeyCode::Right | KeyCode::Tab => {
            session.focused_operator = (session.focused_operator + 1) % operator_count;
        }
        KeyCode::Char(' ') => {
            let op = Operator::ALL[session.focused_operator];
            apply(session, QuizEvent::OperatorChosen(op));
        }
        KeyCode::Enter => {
            // The advance control is disabled until an operator has been chosen.
            if !session.state.attempted() {
                return;
            }
            apply(session, QuizEvent::Advance);
            if session.state.finished {
                tracing::info!(
                    deck = session.deck.name(),
                    score = session.state.score,
                    total = session.deck.len(),
                    "quiz finished"
                );
                *app_state = AppState::Summary;
            } else {
                session.focused_operator = 0;
            }
        }
        code => {
            if let Some(op) = operator_for_key(code) {
                if let Some(index) = Operator::ALL.iter().position(|o| *o == op) {
                    session.focused_operator = index;
                }
                apply(session, QuizEvent::OperatorChosen(op));
            }
        }
    }
}

fn apply(session: &mut QuizSession, event: QuizEvent) {
    session.state = session.state.transition(&session.deck, event);
}

pub fn restart(session: &mut QuizSession, app_state: &mut AppState) {
    restart_with_rng(session, app_state, &mut rand::thread_rng());
}

pub fn restart_with_rng<R: Rng + ?Sized>(
    session: &mut QuizSession,
    app_state: &mut AppState,
    rng: &mut R,
) {
    if session.shuffle {
        shuffle_questions(&mut session.deck, rng);
    }
    apply(session, QuizEvent::Restart);
    session.focused_operator = 0;
    *app_state = AppState::Quiz;
    tracing::info!(deck = session.deck.name(), "quiz restarted");
}
