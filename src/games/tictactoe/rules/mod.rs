//! Game rules for tic-tac-toe.
//!
//! Pure functions over position sets and boards. Rules never mutate the
//! board they inspect.

pub mod draw;
pub mod win;

pub use draw::{evaluate, is_full, outcome};
pub use win::{Line, is_winning_set, lines, winning_line};
