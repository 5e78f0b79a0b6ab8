pub mod core {
	pub mod config;
	pub mod error;
	pub mod input;
	pub mod resources;
	pub mod terminal;
}

pub mod games;

// Re-export for convenience
pub use crate::core::config::Config;
pub use crate::core::resources::{Dictionary, Resources, Stages};
pub use crate::games::hangman::{HangmanState, Outcome, Session};
