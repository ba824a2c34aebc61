//! Line-based console front end
//!
//! Generic over the input and output streams so whole games can be scripted
//! in tests.

use std::io::{BufRead, Write};

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::game::{GamePhase, Outcome};
use crate::session::{Session, TurnReport};
use crate::settings::Settings;

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// Saved and quit
    Saved,
    /// Input closed mid-game; nothing was saved
    Abandoned,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream (used by tests to inspect the transcript)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu, open a session and play it to the end
    pub fn run(&mut self, settings: &Settings) -> Result<SessionEnd> {
        let mut session = self.open_session(settings)?;
        self.play(&mut session)
    }

    /// Menu: load the saved game if asked for and possible, otherwise start fresh
    pub fn open_session(&mut self, settings: &Settings) -> Result<Session> {
        self.say("\n--- HANGMAN ---")?;
        self.say("1. New Game")?;
        self.say("2. Load Saved Game")?;
        self.prompt("Choose an option: ")?;
        let choice = self.read_line()?.unwrap_or_default();

        let store = settings.save_store();
        if choice.trim() == "2" {
            if store.exists() {
                match Session::load(store.clone()) {
                    Ok(session) => {
                        self.say("Game loaded! Welcome back.")?;
                        return Ok(session);
                    }
                    Err(e @ (Error::MissingResource { .. } | Error::CorruptSave { .. })) => {
                        log::warn!("Falling back to a new game: {e}");
                        self.say(&format!("{e}. Starting a new game instead."))?;
                    }
                    Err(e) => return Err(e),
                }
            } else {
                self.say("No saved game found. Starting a new game.")?;
            }
        }

        let dictionary = Dictionary::load(&settings.dictionary_path)?;
        let session = Session::start_new(&dictionary, &mut settings.rng(), store)?;
        self.say("\nComputer has chosen a random word. Good luck!")?;
        Ok(session)
    }

    /// Turn loop: board, prompt, one guess, until the game is over
    pub fn play(&mut self, session: &mut Session) -> Result<SessionEnd> {
        while !session.is_over() {
            self.say(&format!("\n{}", session.render_board()))?;
            self.prompt("Guess a letter (or type 'save' to quit): ")?;

            let Some(line) = self.read_line()? else {
                log::info!("Input closed, leaving without saving");
                return Ok(SessionEnd::Abandoned);
            };

            match session.process_turn(&line) {
                Ok(TurnReport::Saved) => self.say("Game saved! See you later.")?,
                Ok(TurnReport::Hit { outcome, .. }) => {
                    self.say("Good guess!")?;
                    self.announce(session, outcome)?;
                }
                Ok(TurnReport::Miss { letter, outcome }) => {
                    self.say(&format!("Sorry, '{letter}' is not in the word."))?;
                    self.announce(session, outcome)?;
                }
                Err(e) if e.is_recoverable() => self.say(&e.to_string())?,
                Err(e @ Error::Io { .. }) => {
                    log::warn!("Save failed: {e}");
                    self.say(&format!("Could not save the game: {e}"))?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(match session.state().phase() {
            GamePhase::Won => SessionEnd::Won,
            GamePhase::Lost => SessionEnd::Lost,
            GamePhase::Suspended | GamePhase::Playing => SessionEnd::Saved,
        })
    }

    fn announce(&mut self, session: &Session, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Won => {
                self.say(&format!("\n{}", session.render_board()))?;
                self.say("\nCONGRATULATIONS! You saved the hangman!")
            }
            Outcome::Lost => self.say(&format!(
                "\nGAME OVER! The word was: {}",
                session.state().secret_word()
            )),
            Outcome::InProgress => Ok(()),
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| Error::io("<stdout>", e))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")
            .and_then(|()| self.output.flush())
            .map_err(|e| Error::io("<stdout>", e))
    }

    /// One line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("<stdin>", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crate::persistence::SaveStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn play_script(word: &str, lives: u8, script: &str) -> (TempDir, SessionEnd, String, Session) {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("saved_game.json"));
        let state = GameState::restore(word, Vec::new(), lives);
        let mut session = Session::with_state(state, store);

        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let end = console.play(&mut session).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (dir, end, output, session)
    }

    #[test]
    fn test_play_to_win() {
        let (_dir, end, output, _) = play_script("ROBOT", 7, "r\nx\nr\n1\no\nb\nt\n");
        assert_eq!(end, SessionEnd::Won);
        assert!(output.contains("Sorry, 'X' is not in the word."));
        assert!(output.contains("You already guessed 'R'!"));
        assert!(output.contains("Invalid input! Please type a single letter."));
        assert!(output.contains("Word:  R O B O T"));
        assert!(output.contains("CONGRATULATIONS! You saved the hangman!"));
    }

    #[test]
    fn test_play_to_loss() {
        let (_dir, end, output, session) = play_script("ROBOT", 2, "a\nz\n");
        assert_eq!(end, SessionEnd::Lost);
        assert!(output.contains("GAME OVER! The word was: ROBOT"));
        assert_eq!(session.state().lives(), 0);
    }

    #[test]
    fn test_eof_abandons() {
        let (_dir, end, _, session) = play_script("ROBOT", 7, "r\n");
        assert_eq!(end, SessionEnd::Abandoned);
        assert!(!session.store().exists());
    }
}
