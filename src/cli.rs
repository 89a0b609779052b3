use crate::game_state::{GameInterface, UserAction};
use crate::round::{Rejection, RoundView};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

const NEW_GAME_COMMAND: &str = "/new";
const EXIT_COMMAND: &str = "/quit";

/// Word Scramble: make as many words as you can from the letters of a base word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited file of base words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary used to check words are real
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Use the plain line-based interface instead of the full-screen one
    #[arg(short = 's', long = "simple")]
    pub simple: bool,

    /// Where to write the log (defaults to the local data directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

fn parse_action(input: &str) -> UserAction {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case(EXIT_COMMAND) {
        UserAction::Exit
    } else if trimmed.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        UserAction::NewGame
    } else {
        UserAction::Submit(input.to_string())
    }
}

/// Read one line and turn it into an action. End of input counts as exit.
pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("\nEnter a word ('{NEW_GAME_COMMAND}' for a new game, '{EXIT_COMMAND}' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => UserAction::Exit,
        Ok(_) => parse_action(&input),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            UserAction::Exit
        }
    }
}

pub fn display_round(view: &RoundView) {
    println!("Make words out of: {}", view.base_word.to_uppercase());
    display_used_words(view.used_words);
}

pub fn display_used_words(used_words: &[String]) {
    if used_words.is_empty() {
        println!("No words yet.");
        return;
    }
    println!("Your words ({}):", used_words.len());
    for word in used_words {
        println!("  ({}) {word}", word.chars().count());
    }
}

pub fn display_accepted(word: &str, view: &RoundView) {
    println!("Accepted: {word}");
    display_used_words(view.used_words);
}

pub fn display_rejection(rejection: Rejection) {
    println!("{}", rejection.title());
    println!("  {}", rejection.message());
}

pub fn display_new_game_message(view: &RoundView) {
    println!("New game started.");
    display_round(view);
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait over any `BufRead` source.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, view: &RoundView) {
        display_round(view);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(read_action(&mut self.reader))
    }

    fn display_accepted(&mut self, word: &str, view: &RoundView) {
        display_accepted(word, view);
    }

    fn display_rejection(&mut self, rejection: Rejection) {
        display_rejection(rejection);
    }

    fn display_new_game_message(&mut self, view: &RoundView) {
        display_new_game_message(view);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["word-scramble"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert!(!cli.simple);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_cli_with_paths() {
        let cli = Cli::try_parse_from([
            "word-scramble",
            "-i",
            "start.txt",
            "--dictionary",
            "/usr/share/dict/words",
            "--simple",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("start.txt")));
        assert_eq!(
            cli.dictionary_path,
            Some(PathBuf::from("/usr/share/dict/words"))
        );
        assert!(cli.simple);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_read_action_submission_is_passed_through_raw() {
        let mut reader = Cursor::new("  Tin \n");
        assert_eq!(
            read_action(&mut reader),
            UserAction::Submit("  Tin \n".to_string())
        );
    }

    #[test]
    fn test_read_action_commands() {
        let mut reader = Cursor::new("/new\n/QUIT\n  /New  \n");
        assert_eq!(read_action(&mut reader), UserAction::NewGame);
        assert_eq!(read_action(&mut reader), UserAction::Exit);
        assert_eq!(read_action(&mut reader), UserAction::NewGame);
    }

    #[test]
    fn test_read_action_eof_is_exit() {
        let mut reader = Cursor::new("");
        assert_eq!(read_action(&mut reader), UserAction::Exit);
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("terminal went away"))
        }
    }

    #[test]
    fn test_read_action_error_is_exit() {
        let mut reader = std::io::BufReader::new(FailingReader);
        assert_eq!(read_action(&mut reader), UserAction::Exit);
    }

    #[test]
    fn test_read_action_blank_line_is_submission() {
        let mut reader = Cursor::new("\n");
        assert_eq!(
            read_action(&mut reader),
            UserAction::Submit("\n".to_string())
        );
    }

    #[test]
    fn test_cli_interface_reads_in_order() {
        let mut interface = CliInterface::new(Cursor::new("tin\n/quit\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Submit("tin\n".to_string()))
        );
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
