//! Release-prep source cleanup for web front-end projects.
//!
//! Two text-transformation passes over `<root>/src/**`: stripping debug
//! logging calls from script sources, and removing CSS rules whose selector
//! class is referenced nowhere in the paired source tree. Both passes are
//! regex and brace-counting heuristics, deliberately conservative: anything
//! they cannot confidently identify is left untouched.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod reporter;
pub mod scanner;
pub mod stripper;
pub mod styles;

pub use cleaner::{CleanupEngine, CleanupStats};
pub use config::Config;
pub use error::{CleanupError, ErrorRecord, Result};
