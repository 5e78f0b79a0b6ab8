/// Hangman game module
pub mod game;
pub mod renderer;
pub mod session;

pub use game::{GuessResult, HangmanState, Outcome};
pub use renderer::HangmanRenderer;
pub use session::Session;
