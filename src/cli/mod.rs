//! Console display functions for boards and game state.

pub mod interface;

pub use interface::*;
