use crate::dictionary::SpellChecker;
use crate::round::{Outcome, Rejection, Round, RoundView};
use crate::wordbank::WordList;
use crate::{debug_log, info_log};

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Presentation boundary. Implemented by the line-oriented CLI and the TUI.
pub trait GameInterface {
    fn display_round(&mut self, view: &RoundView);
    /// `None` means nothing actionable happened; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, view: &RoundView);
    fn display_rejection(&mut self, rejection: Rejection);
    fn display_new_game_message(&mut self, view: &RoundView);
    fn display_exit_message(&mut self);
}

enum LoopControl {
    Continue,
    Exit,
}

/// Play rounds drawn from `words` until the player exits.
///
/// Returns the round as it stood when the player left.
pub fn game_loop<S, I>(words: &WordList, checker: &S, interface: &mut I) -> Round
where
    S: SpellChecker + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut round = Round::default();
    round.reset_round(words);
    interface.display_round(&round.view());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        if let LoopControl::Exit = handle_action(&mut round, words, checker, interface, action) {
            break;
        }
    }

    round
}

fn handle_action<S, I>(
    round: &mut Round,
    words: &WordList,
    checker: &S,
    interface: &mut I,
    action: UserAction,
) -> LoopControl
where
    S: SpellChecker + ?Sized,
    I: GameInterface + ?Sized,
{
    match action {
        UserAction::Exit => {
            info_log!("Exiting with {} words found", round.used_words().len());
            interface.display_exit_message();
            return LoopControl::Exit;
        }
        UserAction::NewGame => {
            round.reset_round(words);
            interface.display_new_game_message(&round.view());
        }
        UserAction::Submit(raw) => match round.submit(&raw, checker) {
            Ok(Outcome::Accepted(word)) => interface.display_accepted(&word, &round.view()),
            Ok(Outcome::Ignored) => {}
            Err(rejection) => interface.display_rejection(rejection),
        },
    }
    LoopControl::Continue
}
