//! Save/load persistence
//!
//! Features:
//! - Flat JSON record (`secret_word`, `guesses`, `lives`)
//! - Atomic replace (tmp → save) so a finished save is never half written
//! - Field-by-field validation, mismatches reported as `CorruptSave`

pub mod record;
pub mod store;

pub use record::SaveRecord;
pub use store::SaveStore;
