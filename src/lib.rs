pub mod config;
pub mod deck;
pub mod error;
pub mod logger;
pub mod markup;
pub mod models;
pub mod quiz;
mod quiz_tests;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub use config::Config;
pub use deck::{builtin_deck, load_deck};
pub use error::{DeckError, QuizError};
pub use models::{AppState, Deck, Operator, Phase, Question, QuizEvent, QuizSession, QuizState};
pub use quiz::{Feedback, feedback_for, is_correct};
pub use session::{InputOutcome, handle_key};
pub use ui::{draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::escape_markup;
pub use view::{CardView, SummaryView, View, render};
