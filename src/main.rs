use std::io;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::{default_log_path, init_logging};
use word_scramble::tui::TuiInterface;
use word_scramble::{dictionary, game_loop, wordbank};

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(&path)
    {
        eprintln!("Logging disabled: could not open '{}': {e}", path.display());
    }

    // Without base words there is no game to play.
    let words = match wordbank::load(cli.wordbank_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            log::error!("Fatal: {e}");
            eprintln!("Fatal: {e}");
            return ExitCode::FAILURE;
        }
    };

    let checker = match dictionary::load(cli.dictionary_path.as_deref()) {
        Ok(checker) => checker,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.simple {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&words, &checker, &mut interface);
        return ExitCode::SUCCESS;
    }

    let mut interface = match TuiInterface::new() {
        Ok(interface) => interface,
        Err(e) => {
            log::error!("Failed to start terminal interface: {e}");
            eprintln!("Failed to start terminal interface: {e}");
            eprintln!("Try --simple for the line-based interface.");
            return ExitCode::FAILURE;
        }
    };
    let round = game_loop(&words, &checker, &mut interface);
    drop(interface);

    println!(
        "You found {} words from '{}'.",
        round.used_words().len(),
        round.base_word()
    );
    ExitCode::SUCCESS
}
