use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub expression_area: Rect,
    pub hint_area: Rect,
    pub operators_area: Rect,
    pub feedback_area: Rect,
    pub advance_area: Rect,
    pub help_area: Rect,
}

pub struct ExpressionLayout {
    pub left_area: Rect,
    pub middle_area: Rect,
    pub right_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        expression_area: chunks[2],
        hint_area: chunks[3],
        operators_area: chunks[4],
        feedback_area: chunks[5],
        advance_area: chunks[6],
        help_area: chunks[7],
    }
}

/// Splits the expression row into `left ? right` boxes.
pub fn calculate_expression_chunks(area: Rect) -> ExpressionLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(42),
            Constraint::Percentage(16),
            Constraint::Percentage(42),
        ])
        .split(area);

    ExpressionLayout {
        left_area: chunks[0],
        middle_area: chunks[1],
        right_area: chunks[2],
    }
}

pub fn calculate_operator_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
        .to_vec()
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}
