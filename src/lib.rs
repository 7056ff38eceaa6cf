pub mod connector;
pub mod logger;
pub mod models;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use connector::{Anchor, Connector, ConnectorStyle, connectors};
pub use models::{AppState, MatchSession, QuizItem, QuizResults, answer_options, quiz_items};
pub use scoring::score;
pub use session::{handle_key_input, handle_mouse_input};
pub use ui::{BoardLayout, ClickTarget, draw_board, draw_quit_confirmation};
pub use utils::truncate_to_width;
