use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use operator_quiz::{
    AppState, Config, InputOutcome, QuizSession, builtin_deck, deck::shuffle_questions,
    draw_quit_confirmation, draw_quiz, draw_summary, handle_key, load_deck, logger, markup,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logging = logger::init(config.log_dir.as_deref());

    let mut deck = match &config.deck {
        Some(path) => load_deck(path).inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to load deck");
        })?,
        None => builtin_deck(),
    };
    if config.shuffle {
        shuffle_questions(&mut deck, &mut rand::thread_rng());
    }

    let mut session = QuizSession::new(deck, config.shuffle);

    if config.print_markup {
        print!("{}", markup::render_initial(&session.deck));
        return Ok(());
    }

    tracing::info!(
        deck = session.deck.name(),
        questions = session.deck.len(),
        "quiz started"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut QuizSession,
) -> io::Result<()> {
    let mut app_state = AppState::Quiz;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Quiz => draw_quiz(f, session),
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => draw_summary(f, session),
        })?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(session, key, &mut app_state) == InputOutcome::Quit
        {
            break;
        }
    }

    tracing::info!(score = session.state.score(), "quiz closed");
    Ok(())
}
