pub mod layout;

mod board;
mod results;

pub use board::{draw_board, draw_quit_confirmation};
pub use layout::{BoardLayout, ClickTarget};
pub use results::draw_results;
