use crate::models::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::view::{self, PLAY_AGAIN_LABEL, View};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let View::Summary(summary) = view::render(&session.deck, &session.state) else {
        return;
    };
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new(format!("Done! - {}", session.deck.name()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_color = if summary.score == summary.total {
        Color::Green
    } else {
        Color::Yellow
    };
    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(Span::styled(
        summary.score_text(),
        Style::default()
            .fg(score_color)
            .add_modifier(Modifier::BOLD),
    )));
    let content = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r/Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", PLAY_AGAIN_LABEL)),
        Span::styled(
            "q/Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
