use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::QuizResults;

/// Replaces the submit button once the quiz has been scored.
pub fn draw_results(f: &mut Frame, results: &QuizResults, area: Rect) {
    let text = format!(
        "Your score: {} out of {}",
        results.score, results.total
    );
    let color = if results.score == results.total {
        Color::Green
    } else {
        Color::Yellow
    };
    let panel = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quiz Results"),
        );
    f.render_widget(panel, area);
}
