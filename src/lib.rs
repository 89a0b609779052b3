// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{ENGLISH, SpellChecker, WordListSpellChecker};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use round::{Outcome, Rejection, Round, RoundView};
pub use wordbank::{WordList, load_wordbank_from_file, load_wordbank_from_str, pick_random};
