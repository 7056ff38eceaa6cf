use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::logger;
use crate::models::{AppState, Column, MatchSession};
use crate::ui::layout::{BoardLayout, ClickTarget};

/// Translates a key press into a state transition. The highlight cursor is
/// presentation state; only Enter/s/r touch the match state itself.
pub fn handle_key_input(session: &mut MatchSession, key: KeyCode, app_state: &mut AppState) {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => {
            *app_state = AppState::QuitConfirm;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            session.highlight_index = session.highlight_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let max = column_len(session).saturating_sub(1);
            if session.highlight_index < max {
                session.highlight_index += 1;
            }
        }
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            session.highlight_column = match session.highlight_column {
                Column::Questions => Column::Answers,
                Column::Answers => Column::Questions,
            };
            session.highlight_index = session
                .highlight_index
                .min(column_len(session).saturating_sub(1));
        }
        KeyCode::Enter => activate_highlight(session),
        KeyCode::Char('s') => submit(session),
        KeyCode::Char('r') => {
            logger::log("reset");
            session.reset();
        }
        KeyCode::Char('c') => {
            session.connector_style = session.connector_style.toggled();
        }
        _ => {}
    }
}

/// Routes a left click to whatever card or button it landed on. `area` is the
/// full terminal area the board was last drawn into.
pub fn handle_mouse_input(session: &mut MatchSession, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let layout = BoardLayout::compute(area, &session.items, &session.answers);
    match layout.hit_test(mouse.column, mouse.row) {
        Some(ClickTarget::Question(id)) => session.select_question(id),
        Some(ClickTarget::Answer(label)) => session.select_answer(&label),
        Some(ClickTarget::Button) => {
            if session.is_submitted() {
                logger::log("reset");
                session.reset();
            } else {
                submit(session);
            }
        }
        None => {}
    }
}

fn column_len(session: &MatchSession) -> usize {
    match session.highlight_column {
        Column::Questions => session.items.len(),
        Column::Answers => session.answers.len(),
    }
}

fn activate_highlight(session: &mut MatchSession) {
    match session.highlight_column {
        Column::Questions => {
            if let Some(item) = session.items.get(session.highlight_index) {
                session.select_question(item.id);
            }
        }
        Column::Answers => {
            if let Some(label) = session.answers.get(session.highlight_index) {
                let label = label.clone();
                session.select_answer(&label);
            }
        }
    }
}

fn submit(session: &mut MatchSession) {
    session.submit();
    if let Some(results) = session.results {
        logger::log(&format!(
            "submitted: {} / {}",
            results.score, results.total
        ));
    }
}
