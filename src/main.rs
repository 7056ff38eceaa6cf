use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use match_the_answer::{
    AppState, MatchSession, draw_board, draw_quit_confirmation, handle_key_input,
    handle_mouse_input, logger,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Quiz;
    let mut session = MatchSession::new();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Quiz => draw_board(f, &session),
            AppState::QuitConfirm => draw_quit_confirmation(f),
        })?;

        match event::read()? {
            Event::Key(key) => match app_state {
                AppState::Quiz => handle_key_input(&mut session, key.code, &mut app_state),
                AppState::QuitConfirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => break,
                    KeyCode::Char('n') | KeyCode::Esc => app_state = AppState::Quiz,
                    _ => {}
                },
            },
            Event::Mouse(mouse) => {
                if app_state == AppState::Quiz {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse_input(&mut session, mouse, area);
                }
            }
            _ => {}
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
