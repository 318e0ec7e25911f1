use crate::models::{Deck, QuizState};
use crate::utils::escape_markup;
use crate::view::{self, CardView, PLAY_AGAIN_LABEL, SummaryView, View};
use std::fmt::Write;

/// HTML fragment of the first card of a fresh quiz.
pub fn render_initial(deck: &Deck) -> String {
    render(&view::render(deck, &QuizState::default()))
}

/// HTML fragment of a view, for embedding a card in a page.
pub fn render(view: &View<'_>) -> String {
    match view {
        View::Card(card) => render_card(card),
        View::Summary(summary) => render_summary(summary),
    }
}

fn render_card(card: &CardView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<div class=\"progress\">{}</div>",
        escape_markup(&card.progress_text)
    );
    let _ = writeln!(
        out,
        "<progress value=\"{}\" max=\"100\"></progress>",
        (card.progress_ratio * 100.0) as u8
    );

    out.push_str("<div class=\"expr-row\">\n");
    let _ = writeln!(out, "  <div class=\"box\">{}</div>", escape_markup(card.left_label));
    out.push_str("  <div class=\"box mid\">?</div>\n");
    let _ = writeln!(out, "  <div class=\"box\">{}</div>", escape_markup(card.right_label));
    out.push_str("</div>\n");

    let _ = writeln!(out, "<div class=\"hint\">{}</div>", escape_markup(card.hint));

    for control in &card.operators {
        let class = if control.selected { "op selected" } else { "op" };
        let disabled = if control.enabled { "" } else { " disabled" };
        let _ = writeln!(
            out,
            "<button class=\"{}\"{}>{}</button>",
            class,
            disabled,
            escape_markup(control.glyph)
        );
    }

    if let Some(feedback) = &card.feedback {
        let class = if feedback.correct { "ok" } else { "nope" };
        let _ = writeln!(
            out,
            "<div class=\"feedback {}\">{}</div>",
            class,
            escape_markup(feedback.message)
        );
    }

    let disabled = if card.advance_enabled { "" } else { " disabled" };
    let _ = writeln!(
        out,
        "<button class=\"next\"{}>{}</button>",
        disabled,
        escape_markup(card.advance_label)
    );

    out
}

fn render_summary(summary: &SummaryView) -> String {
    let mut out = String::new();
    out.push_str("<h2>Done!</h2>\n");
    let _ = writeln!(
        out,
        "<p>Score: <b>{} / {}</b></p>",
        summary.score, summary.total
    );
    let _ = writeln!(out, "<button class=\"restart\">{}</button>", PLAY_AGAIN_LABEL);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin_deck;
    use crate::models::{Operator, Question};

    #[test]
    fn test_first_card_markup() {
        let deck = builtin_deck();
        let html = render(&view::render(&deck, &QuizState::default()));

        assert!(html.contains("<div class=\"progress\">1 / 3</div>"));
        assert!(html.contains("<div class=\"box\">putti</div>"));
        assert!(html.contains("<button class=\"op\">&lt;=</button>"));
        assert!(html.contains("<button class=\"op\">&gt;=</button>"));
        assert!(html.contains("<button class=\"next\" disabled>Next →</button>"));
        assert!(!html.contains("feedback"));
    }

    #[test]
    fn test_render_initial_matches_first_card() {
        let deck = builtin_deck();
        let html = render_initial(&deck);
        assert_eq!(html, render(&view::render(&deck, &QuizState::default())));
        assert!(html.contains("<progress value=\"0\" max=\"100\"></progress>"));
        assert!(html.contains("<div class=\"box\">putti</div>"));
        assert!(html.contains("<button class=\"next\" disabled>Next →</button>"));
    }

    #[test]
    fn test_progress_value_is_truncated() {
        let deck = builtin_deck();
        let second = QuizState {
            current_index: 1,
            ..QuizState::default()
        };
        let third = QuizState {
            current_index: 2,
            ..QuizState::default()
        };
        let html = render(&view::render(&deck, &second));
        assert!(html.contains("<progress value=\"33\" max=\"100\"></progress>"));
        let html = render(&view::render(&deck, &third));
        assert!(html.contains("<progress value=\"66\" max=\"100\"></progress>"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let deck = Deck::new(
            "escape",
            vec![Question {
                left_label: "<script>".to_string(),
                right_label: "a & b".to_string(),
                correct_operator: Operator::Equal,
                correct_message: "x > y".to_string(),
                incorrect_message: "no".to_string(),
            }],
        )
        .unwrap();
        let mut state = QuizState::default();
        state.choose_operator(Operator::Equal).unwrap();
        let html = render(&view::render(&deck, &state));

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("<div class=\"feedback ok\">x &gt; y</div>"));
        assert!(html.contains("<button class=\"next\">Finish</button>"));
    }

    #[test]
    fn test_non_ascii_preserved() {
        let deck = builtin_deck();
        let state = QuizState {
            current_index: 2,
            ..QuizState::default()
        };
        let html = render(&view::render(&deck, &state));
        assert!(html.contains("<div class=\"box\">hvolsvöllur</div>"));
    }

    #[test]
    fn test_summary_markup() {
        let deck = builtin_deck();
        let state = QuizState {
            current_index: 2,
            score: 3,
            selected_operator: Some(Operator::LessOrEqual),
            finished: true,
        };
        let html = render(&view::render(&deck, &state));
        assert!(html.contains("Score: <b>3 / 3</b>"));
        assert!(html.contains("Play again"));
    }
}
