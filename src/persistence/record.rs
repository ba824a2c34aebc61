//! The persisted save record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{MAX_WORD_LEN, MIN_WORD_LEN, STARTING_LIVES};
use crate::game::GameState;

/// Everything needed to resume a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub secret_word: String,
    /// One-letter strings, oldest guess first
    pub guesses: Vec<String>,
    pub lives: u8,
}

impl SaveRecord {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            secret_word: state.secret_word().to_string(),
            guesses: state.guesses().iter().map(char::to_string).collect(),
            lives: state.lives(),
        }
    }

    /// Restore a game. Assumes the record came through `from_value`.
    pub fn to_state(&self) -> GameState {
        let guesses = self.guesses.iter().filter_map(|g| g.chars().next()).collect();
        GameState::restore(&self.secret_word, guesses, self.lives)
    }

    /// Validate an untyped JSON document field by field.
    ///
    /// Returns a human readable reason on the first problem found.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| "expected a JSON object".to_string())?;

        let secret_word = match object.get("secret_word") {
            Some(Value::String(word)) if !word.trim().is_empty() => word.trim().to_uppercase(),
            Some(Value::String(_)) => return Err("secret_word is empty".into()),
            Some(_) => return Err("secret_word is not a string".into()),
            None => return Err("missing field secret_word".into()),
        };
        let len = secret_word.chars().count();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(format!(
                "secret_word has {len} letters, expected {MIN_WORD_LEN} to {MAX_WORD_LEN}"
            ));
        }

        let raw_guesses = match object.get("guesses") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err("guesses is not a list".into()),
            None => return Err("missing field guesses".into()),
        };
        let mut guesses: Vec<String> = Vec::with_capacity(raw_guesses.len());
        for item in raw_guesses {
            let letter = item
                .as_str()
                .map(str::to_uppercase)
                .filter(|s| s.len() == 1 && s.chars().all(|c| c.is_ascii_uppercase()))
                .ok_or_else(|| format!("guess {item} is not a single letter"))?;
            if guesses.contains(&letter) {
                return Err(format!("guess {letter} appears twice"));
            }
            guesses.push(letter);
        }

        let lives = match object.get("lives") {
            Some(Value::Number(n)) => n
                .as_u64()
                .filter(|&n| n <= u64::from(STARTING_LIVES))
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| format!("lives {n} is out of range"))?,
            Some(_) => return Err("lives is not a number".into()),
            None => return Err("missing field lives".into()),
        };

        // Zero lives is only valid for a word that is already solved
        let solved = secret_word
            .chars()
            .all(|c| guesses.iter().any(|g| g.starts_with(c)));
        if lives == 0 && !solved {
            return Err("no lives left in an unfinished game".into());
        }

        Ok(Self {
            secret_word,
            guesses,
            lives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_state() {
        let mut state = GameState::new("robot");
        state.apply_guess('T').unwrap();
        state.apply_guess('Q').unwrap();

        let record = SaveRecord::from_state(&state);
        assert_eq!(record.secret_word, "ROBOT");
        assert_eq!(record.guesses, vec!["T", "Q"]);
        assert_eq!(record.lives, 6);
    }

    #[test]
    fn test_json_field_names() {
        let record = SaveRecord {
            secret_word: "ROBOT".into(),
            guesses: vec!["R".into()],
            lives: 7,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"secret_word": "ROBOT", "guesses": ["R"], "lives": 7}));
    }

    #[test]
    fn test_from_value_accepts_valid() {
        let value = json!({"secret_word": "planet", "guesses": ["p", "Z"], "lives": 6});
        let record = SaveRecord::from_value(&value).unwrap();
        assert_eq!(record.secret_word, "PLANET");
        assert_eq!(record.guesses, vec!["P", "Z"]);

        let state = record.to_state();
        assert_eq!(state.guesses(), &['P', 'Z']);
        assert_eq!(state.lives(), 6);
        assert!(!state.is_over());
    }

    #[test]
    fn test_from_value_word_length_bounds() {
        for word in ["ROBOT", "TWELVELETTER"] {
            let value = json!({"secret_word": word, "guesses": [], "lives": 7});
            assert!(SaveRecord::from_value(&value).is_ok(), "{word}");
        }
    }

    #[test]
    fn test_from_value_zero_lives_only_when_solved() {
        let value = json!({"secret_word": "ROBOT", "guesses": ["R", "O", "B", "T"], "lives": 0});
        assert!(SaveRecord::from_value(&value).is_ok());
    }

    #[test]
    fn test_from_value_rejects_missing_fields() {
        let cases = [
            json!({"guesses": [], "lives": 7}),
            json!({"secret_word": "ROBOT", "lives": 7}),
            json!({"secret_word": "ROBOT", "guesses": []}),
            json!(["ROBOT", [], 7]),
        ];
        for value in cases {
            assert!(SaveRecord::from_value(&value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_from_value_rejects_bad_types() {
        let cases = [
            json!({"secret_word": 5, "guesses": [], "lives": 7}),
            json!({"secret_word": "", "guesses": [], "lives": 7}),
            json!({"secret_word": "AB", "guesses": [], "lives": 7}),
            json!({"secret_word": "ABCD", "guesses": [], "lives": 7}),
            json!({"secret_word": "ABCDEFGHIJKLM", "guesses": [], "lives": 7}),
            json!({"secret_word": "ROBOT", "guesses": ["Z"], "lives": 0}),
            json!({"secret_word": "ROBOT", "guesses": "RO", "lives": 7}),
            json!({"secret_word": "ROBOT", "guesses": ["RO"], "lives": 7}),
            json!({"secret_word": "ROBOT", "guesses": [1], "lives": 7}),
            json!({"secret_word": "ROBOT", "guesses": ["R", "r"], "lives": 7}),
            json!({"secret_word": "ROBOT", "guesses": [], "lives": "7"}),
            json!({"secret_word": "ROBOT", "guesses": [], "lives": -1}),
            json!({"secret_word": "ROBOT", "guesses": [], "lives": 8}),
            json!({"secret_word": "ROBOT", "guesses": [], "lives": 2.5}),
        ];
        for value in cases {
            assert!(SaveRecord::from_value(&value).is_err(), "{value}");
        }
    }
}
