use crate::models::QuizSession;
use crate::ui::layout::{calculate_expression_chunks, calculate_operator_chunks, calculate_quiz_chunks};
use crate::utils::truncate_string;
use crate::view::{self, CardView, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_header(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Gunni's cool operator teaching lesson innit",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::from("Pick the sign that makes the statement "),
            Span::styled("True", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(": == · <= · >="),
        ]),
    ];
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    // The summary screen takes over once the state is finished.
    let View::Card(card) = view::render(&session.deck, &session.state) else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area());

    draw_header(f, layout.header_area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(session.deck.name().to_string()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(card.progress_ratio.clamp(0.0, 1.0))
        .label(card.progress_text.clone());
    f.render_widget(gauge, layout.progress_area);

    draw_expression(f, &card, layout.expression_area);

    let hint = Paragraph::new(card.hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, layout.hint_area);

    draw_operators(f, &card, session.focused_operator, layout.operators_area);

    let feedback = match &card.feedback {
        Some(feedback) => {
            let color = if feedback.correct { Color::Green } else { Color::Red };
            Paragraph::new(feedback.message)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
        }
        None => Paragraph::new(""),
    };
    f.render_widget(feedback, layout.feedback_area);

    let (advance_text, advance_style) = if card.advance_enabled {
        (
            card.advance_label.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("{} (choose an operator first)", card.advance_label),
            Style::default().fg(Color::DarkGray),
        )
    };
    let advance = Paragraph::new(advance_text)
        .style(advance_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(advance, layout.advance_area);

    let help_text = vec![Line::from(vec![
        Span::styled("1/2/3", key_style()),
        Span::from(" Choose  "),
        Span::styled("←/→", key_style()),
        Span::from(" Focus  "),
        Span::styled("Space", key_style()),
        Span::from(" Pick  "),
        Span::styled("Enter", key_style()),
        Span::from(format!(" {}  ", card.advance_label)),
        Span::styled("Esc", key_style()),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_expression(f: &mut Frame, card: &CardView<'_>, area: Rect) {
    let chunks = calculate_expression_chunks(area);
    let label_width = chunks.left_area.width.saturating_sub(2) as usize;

    let boxed = |text: String| {
        Paragraph::new(vec![Line::from(""), Line::from(text)])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };

    f.render_widget(
        boxed(truncate_string(card.left_label, label_width)),
        chunks.left_area,
    );

    let middle = card
        .operators
        .iter()
        .find(|c| c.selected)
        .map(|c| c.glyph)
        .unwrap_or("?");
    f.render_widget(boxed(middle.to_string()), chunks.middle_area);

    f.render_widget(
        boxed(truncate_string(card.right_label, label_width)),
        chunks.right_area,
    );
}

fn draw_operators(f: &mut Frame, card: &CardView<'_>, focused: usize, area: Rect) {
    let chunks = calculate_operator_chunks(area);

    for (i, (control, chunk)) in card.operators.iter().zip(chunks).enumerate() {
        let mut style = Style::default();
        if control.selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        let border_style = if i == focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(format!("[{}] {}", i + 1, control.glyph))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(button, chunk);
    }
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Your progress will be lost.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
