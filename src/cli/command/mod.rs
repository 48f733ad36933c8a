pub mod import;

pub use import::{import, ImportOutcome};
