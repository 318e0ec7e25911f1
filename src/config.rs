use clap::Parser;
use std::path::PathBuf;

/// Pick the sign that makes each statement true.
#[derive(Debug, Clone, Parser)]
#[command(name = "operator-quiz", version, about)]
pub struct Config {
    /// Load questions from a .csv or .json deck instead of the built-in lesson
    #[arg(long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Shuffle the question order at start and on every restart
    #[arg(long)]
    pub shuffle: bool,

    /// Directory for the log file
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Print the first card as an HTML fragment and exit
    #[arg(long)]
    pub print_markup: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_config_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["operator-quiz"]);
        assert!(config.deck.is_none());
        assert!(!config.shuffle);
        assert!(!config.print_markup);
    }

    #[test]
    fn test_all_flags() {
        let config = Config::parse_from([
            "operator-quiz",
            "--deck",
            "lesson.csv",
            "--shuffle",
            "--log-dir",
            "/tmp/logs",
            "--print-markup",
        ]);
        assert_eq!(config.deck, Some(PathBuf::from("lesson.csv")));
        assert!(config.shuffle);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(config.print_markup);
    }
}
