use crate::error::DeckError;
use crate::models::{Deck, Operator, Question};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;

pub const BUILTIN_DECK_NAME: &str = "Operator lesson";

const CSV_FIELDS: usize = 5;

fn q(left: &str, right: &str, correct: Operator, correct_msg: &str, incorrect_msg: &str) -> Question {
    Question {
        left_label: left.to_string(),
        right_label: right.to_string(),
        correct_operator: correct,
        correct_message: correct_msg.to_string(),
        incorrect_message: incorrect_msg.to_string(),
    }
}

pub fn builtin_deck() -> Deck {
    let questions = vec![
        q(
            "putti",
            "best doggo ever",
            Operator::Equal,
            "✅ putti is indeed 'equal to' best doggo ever.",
            "❌ ummm try again, isn't putti the best doggo ever?",
        ),
        q(
            "gunni",
            "kinda funny",
            Operator::GreaterOrEqual,
            "✅ gunni is definitely 'greater than or equal to' kinda funny",
            "❌ cmonnn gunni is kinda funny innit",
        ),
        q(
            "hvolsvöllur",
            "Hella",
            Operator::LessOrEqual,
            "✅ hvolsvöllur is 'less than or equal to' hella. tbh, hvolsvöllur is less than hella but for this teaching exercise, it had to be done this way",
            "❌ neiii, hvolsvöllur is definitely less than hella",
        ),
    ];
    Deck {
        name: BUILTIN_DECK_NAME.to_string(),
        questions,
    }
}

/// Loads a deck from a `.csv` or `.json` file. The deck is named after the file stem.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "deck".to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let questions = match extension.as_str() {
        "csv" => parse_csv(&content)?,
        "json" => serde_json::from_str::<Vec<Question>>(&content)?,
        other => return Err(DeckError::UnsupportedFormat(other.to_string())),
    };

    let deck = Deck::new(name, questions)?;
    tracing::info!(deck = deck.name(), questions = deck.len(), "deck loaded");
    Ok(deck)
}

/// Parses one question per line: `left,right,operator,correct_msg,incorrect_msg`.
/// Blank lines and `#` comments are skipped.
pub fn parse_csv(content: &str) -> Result<Vec<Question>, DeckError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut questions = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let fields = parse_csv_line(line);
        let [left, right, op, correct_msg, incorrect_msg]: [String; CSV_FIELDS] =
            fields.try_into().map_err(|fields: Vec<String>| DeckError::Parse {
                line: line_no,
                reason: format!("expected {} fields, found {}", CSV_FIELDS, fields.len()),
            })?;

        let correct_operator = op.parse::<Operator>().map_err(|reason| DeckError::Parse {
            line: line_no,
            reason,
        })?;

        questions.push(Question {
            left_label: left,
            right_label: right,
            correct_operator,
            correct_message: correct_msg,
            incorrect_message: incorrect_msg,
        });
    }

    Ok(questions)
}

/// Splits a CSV line into fields. Quoted fields may contain commas and `""` escapes.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes && current.is_empty() => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }
    fields.push(current);

    fields
}

pub fn shuffle_questions<R: Rng + ?Sized>(deck: &mut Deck, rng: &mut R) {
    deck.questions.shuffle(rng);
}
