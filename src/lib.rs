pub mod board;
pub mod core;
pub mod level_text;
pub mod solver;

#[cfg(test)]
mod test;

pub use board::{apply_move, apply_move_with, generate, generate_with, is_valid_move, status, BoardState};
