pub mod cli;
pub mod core;
mod logging;
pub mod player;
pub mod prelude;
pub mod session;

pub use crate::core::*;
pub use logging::init_logging;
pub use player::{AiPlayer, CliPlayer, Move, Player};
pub use session::{Outcome, Session, Turn};
