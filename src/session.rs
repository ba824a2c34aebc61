//! A single game session
//!
//! Owns the game state and its save slot, and applies the persistence side
//! effects of each turn (save on request, delete once the game is decided).

use rand::Rng;

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::game::{Command, GameState, GuessResult, Outcome, parse_input};
use crate::persistence::{SaveRecord, SaveStore};

/// What an accepted turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// Game written to disk, session over without a result
    Saved,
    /// Letter is in the word
    Hit { letter: char, outcome: Outcome },
    /// Letter is not in the word, one life lost
    Miss { letter: char, outcome: Outcome },
}

impl TurnReport {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnReport::Saved => None,
            TurnReport::Hit { outcome, .. } | TurnReport::Miss { outcome, .. } => Some(*outcome),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    store: SaveStore,
}

impl Session {
    /// Start a fresh game with a word drawn from `dictionary`
    pub fn start_new<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        rng: &mut R,
        store: SaveStore,
    ) -> Result<Self> {
        let word = dictionary.pick(rng)?;
        log::info!("New game started ({} letters)", word.chars().count());
        Ok(Self::with_state(GameState::new(&word), store))
    }

    /// Resume the game held in `store`
    pub fn load(store: SaveStore) -> Result<Self> {
        let record = store.load()?;
        Ok(Self::with_state(record.to_state(), store))
    }

    pub fn with_state(state: GameState, store: SaveStore) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn render_board(&self) -> String {
        self.state.board().to_string()
    }

    /// Persist the current game. The phase is left alone.
    pub fn save(&self) -> Result<()> {
        self.store.save(&SaveRecord::from_state(&self.state))
    }

    pub fn delete_save(&self) -> Result<()> {
        self.store.delete()
    }

    /// Handle one line of player input.
    ///
    /// Rejected guesses come back as `Error::Guess` with nothing changed.
    pub fn process_turn(&mut self, raw: &str) -> Result<TurnReport> {
        if self.state.is_over() {
            return Err(Error::GameOver);
        }

        let letter = match parse_input(raw)? {
            Command::Save => {
                self.save()?;
                self.state.suspend();
                return Ok(TurnReport::Saved);
            }
            Command::Guess(letter) => letter,
        };

        let result = self.state.apply_guess(letter)?;
        log::debug!("Guess {letter}: {result:?}, {} lives left", self.state.lives());

        let outcome = self.evaluate_outcome();
        Ok(match result {
            GuessResult::Hit => TurnReport::Hit { letter, outcome },
            GuessResult::Miss => TurnReport::Miss { letter, outcome },
        })
    }

    /// Evaluate the board; a decided game removes its save.
    ///
    /// The result stands even if the save cannot be removed.
    pub fn evaluate_outcome(&mut self) -> Outcome {
        let outcome = self.state.evaluate_outcome();
        if outcome != Outcome::InProgress {
            log::info!("Game finished: {outcome:?}");
            if let Err(e) = self.store.delete() {
                log::warn!("Could not remove finished save: {e}");
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuessError;
    use crate::game::GamePhase;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use tempfile::TempDir;

    fn session(word: &str, guesses: &[char], lives: u8) -> (TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("saved_game.json"));
        let state = GameState::restore(word, guesses.to_vec(), lives);
        (dir, Session::with_state(state, store))
    }

    #[test]
    fn test_start_new() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path().join("saved_game.json"));
        let dict = Dictionary::from_words(["cat", "robot"]);
        let mut rng = Pcg32::seed_from_u64(7);

        let session = Session::start_new(&dict, &mut rng, store).unwrap();
        assert_eq!(session.state().secret_word(), "ROBOT");
        assert_eq!(session.state().lives(), 7);
        assert!(session.state().guesses().is_empty());
        assert!(!session.store().exists());
    }

    #[test]
    fn test_hit_and_miss_reports() {
        let (_dir, mut session) = session("ROBOT", &[], 7);

        assert_eq!(
            session.process_turn(" o ").unwrap(),
            TurnReport::Hit { letter: 'O', outcome: Outcome::InProgress }
        );
        assert_eq!(
            session.process_turn("x").unwrap(),
            TurnReport::Miss { letter: 'X', outcome: Outcome::InProgress }
        );
        assert_eq!(session.state().lives(), 6);
    }

    #[test]
    fn test_rejected_input_changes_nothing() {
        let (_dir, mut session) = session("APPLE", &['A'], 7);
        let before = session.state().clone();

        assert!(matches!(
            session.process_turn("A"),
            Err(Error::Guess(GuessError::DuplicateGuess('A')))
        ));
        for raw in ["1", "AB"] {
            assert!(matches!(
                session.process_turn(raw),
                Err(Error::Guess(GuessError::InvalidInput(_)))
            ));
        }
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_save_and_quit() {
        // Already solved, but saving must not evaluate a result
        let (_dir, mut session) = session("ROBOT", &['R', 'O', 'B', 'T'], 3);

        assert_eq!(session.process_turn("SaVe").unwrap(), TurnReport::Saved);
        assert_eq!(session.state().phase(), GamePhase::Suspended);
        assert!(session.is_over());
        assert!(session.store().exists());
        assert!(matches!(session.process_turn("Z"), Err(Error::GameOver)));
    }

    #[test]
    fn test_load_resumes_as_playing() {
        let (_dir, mut session) = session("PLANET", &['E', 'Q'], 6);
        session.process_turn("save").unwrap();

        let loaded = Session::load(session.store().clone()).unwrap();
        assert_eq!(loaded.state().secret_word(), "PLANET");
        assert_eq!(loaded.state().guesses(), &['E', 'Q']);
        assert_eq!(loaded.state().lives(), 6);
        assert_eq!(loaded.state().phase(), GamePhase::Playing);
    }

    #[test]
    fn test_win_deletes_save() {
        let (_dir, mut session) = session("ROBOT", &['R', 'O', 'B'], 7);
        session.save().unwrap();
        assert!(session.store().exists());

        let report = session.process_turn("t").unwrap();
        assert_eq!(report.outcome(), Some(Outcome::Won));
        assert_eq!(session.state().phase(), GamePhase::Won);
        assert!(!session.store().exists());
    }

    #[test]
    fn test_loss_deletes_save() {
        let (_dir, mut session) = session("ROBOT", &[], 1);
        session.save().unwrap();

        let report = session.process_turn("z").unwrap();
        assert_eq!(report, TurnReport::Miss { letter: 'Z', outcome: Outcome::Lost });
        assert_eq!(session.state().lives(), 0);
        assert!(session.is_over());
        assert!(!session.store().exists());
    }

    #[test]
    fn test_delete_save() {
        let (_dir, session) = session("ROBOT", &[], 7);
        session.delete_save().unwrap();
        session.save().unwrap();
        session.delete_save().unwrap();
        assert!(!session.store().exists());
    }
}
