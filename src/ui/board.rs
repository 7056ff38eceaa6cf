use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Wrap,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::connector::{self, Connector};
use crate::models::{Column, MatchSession};
use crate::ui::layout::BoardLayout;
use crate::ui::results::draw_results;
use crate::utils::truncate_to_width;

const CONNECTOR_COLOR: Color = Color::Blue;

pub fn draw_board(f: &mut Frame, session: &MatchSession) {
    let layout = BoardLayout::compute(f.area(), &session.items, &session.answers);

    let header = Paragraph::new("Match The Answer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let banner = Paragraph::new(banner_text(session, layout.banner_area.width))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner, layout.banner_area);

    draw_question_cards(f, session, &layout);
    draw_answer_cards(f, session, &layout);

    let connectors = connector::connectors(&session.matches, &layout);
    draw_connectors(f, session, &layout, &connectors);

    if let Some(results) = &session.results {
        draw_results(f, results, layout.button_area);
    } else {
        let submit = Paragraph::new("Submit")
            .style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(submit, layout.button_area);
    }

    draw_help_bar(f, session, &layout);
}

fn banner_text(session: &MatchSession, width: u16) -> String {
    if session.is_submitted() {
        return "Review your matches below".to_string();
    }
    match session.armed {
        Some(id) => {
            let prompt = session
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.prompt.as_str())
                .unwrap_or("");
            // Leave room for the borders and the fixed wording around the prompt.
            let room = (width as usize).saturating_sub(45).max(10);
            format!(
                "Matching \"{}\" - pick an answer on the right",
                truncate_to_width(prompt, room)
            )
        }
        None => "Select an option from the left-hand side".to_string(),
    }
}

fn draw_question_cards(f: &mut Frame, session: &MatchSession, layout: &BoardLayout) {
    for (index, (id, rect)) in layout.question_rects().iter().enumerate() {
        let Some(item) = session.items.iter().find(|item| item.id == *id) else {
            continue;
        };
        let armed = session.armed == Some(*id);
        let matched = session.matches.contains_key(id);
        let highlighted =
            session.highlight_column == Column::Questions && session.highlight_index == index;

        let card_style = if armed {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        let border_style = if highlighted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if matched {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        let title = if matched {
            format!("Q{id} *")
        } else {
            format!("Q{id}")
        };

        let card = Paragraph::new(item.prompt.as_str())
            .wrap(Wrap { trim: true })
            .style(card_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            );
        f.render_widget(card, *rect);
    }
}

fn draw_answer_cards(f: &mut Frame, session: &MatchSession, layout: &BoardLayout) {
    for (index, (label, rect)) in layout.answer_rects().iter().enumerate() {
        let highlighted =
            session.highlight_column == Column::Answers && session.highlight_index == index;
        let border_style = if highlighted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let card = Paragraph::new(label.as_str())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(card, *rect);
    }
}

/// Paints connectors on the gutter between the columns with a braille canvas.
/// Anchor coordinates are absolute; the canvas y axis grows upwards, so rows
/// are mirrored into canvas space before drawing.
fn draw_connectors(
    f: &mut Frame,
    session: &MatchSession,
    layout: &BoardLayout,
    connectors: &[Connector],
) {
    let gutter = layout.gutter;
    if gutter.width == 0 || gutter.height == 0 || connectors.is_empty() {
        return;
    }
    let flip = |y: f64| f64::from(gutter.y) + f64::from(gutter.bottom()) - y;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([f64::from(gutter.x), f64::from(gutter.right())])
        .y_bounds([f64::from(gutter.y), f64::from(gutter.bottom())])
        .paint(|ctx| {
            for conn in connectors {
                let points = session.connector_style.polyline(conn.from, conn.to);
                for pair in points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].x,
                        y1: flip(pair[0].y),
                        x2: pair[1].x,
                        y2: flip(pair[1].y),
                        color: CONNECTOR_COLOR,
                    });
                }
                ctx.print(
                    conn.to.x - 1.0,
                    flip(conn.to.y),
                    Span::styled(">", Style::default().fg(CONNECTOR_COLOR)),
                );
            }
        });
    f.render_widget(canvas, gutter);
}

fn draw_help_bar(f: &mut Frame, session: &MatchSession, layout: &BoardLayout) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled("Click/Enter", key_style),
        Span::from(" Select  "),
        Span::styled("↑/↓", key_style),
        Span::from(" Move  "),
        Span::styled("Tab", key_style),
        Span::from(" Column  "),
    ];
    if session.is_submitted() {
        spans.extend([Span::styled("r", key_style), Span::from(" Try Again  ")]);
    } else {
        spans.extend([Span::styled("s", key_style), Span::from(" Submit  ")]);
    }
    spans.extend([
        Span::styled("c", key_style),
        Span::from(format!(
            " Connector ({})  ",
            session.connector_style.label()
        )),
        Span::styled("q", key_style),
        Span::from(" Quit"),
    ]);

    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Matches are not saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Matching)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
