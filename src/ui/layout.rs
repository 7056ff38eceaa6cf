use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::models::QuizItem;

pub const QUESTION_CARD_HEIGHT: u16 = 4;
pub const ANSWER_CARD_HEIGHT: u16 = 3;
const CARD_GAP: u16 = 1;

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Question(u32),
    Answer(String),
    /// The submit button, or the try-again button once results are shown.
    Button,
}

/// Screen geometry for the quiz board, keyed by element identity rather than
/// by column index so connector lookup and hit testing cannot drift out of
/// sync with the card order.
pub struct BoardLayout {
    pub header_area: Rect,
    pub banner_area: Rect,
    pub board_area: Rect,
    pub question_column: Rect,
    pub gutter: Rect,
    pub answer_column: Rect,
    pub button_area: Rect,
    pub help_area: Rect,
    question_rects: Vec<(u32, Rect)>,
    answer_rects: Vec<(String, Rect)>,
}

impl BoardLayout {
    /// Pure function of the terminal area; called identically from the draw
    /// path and the mouse handler so both see the same geometry.
    pub fn compute(area: Rect, items: &[QuizItem], answers: &[String]) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Min(8),
                Constraint::Percentage(40),
            ])
            .split(chunks[2]);

        let question_rects = stack_cards(columns[0], QUESTION_CARD_HEIGHT)
            .zip(items.iter())
            .map(|(rect, item)| (item.id, rect))
            .collect();
        let answer_rects = stack_cards(columns[2], ANSWER_CARD_HEIGHT)
            .zip(answers.iter())
            .map(|(rect, label)| (label.clone(), rect))
            .collect();

        Self {
            header_area: chunks[0],
            banner_area: chunks[1],
            board_area: chunks[2],
            question_column: columns[0],
            gutter: columns[1],
            answer_column: columns[2],
            button_area: chunks[3],
            help_area: chunks[4],
            question_rects,
            answer_rects,
        }
    }

    pub fn question_rects(&self) -> &[(u32, Rect)] {
        &self.question_rects
    }

    pub fn answer_rects(&self) -> &[(String, Rect)] {
        &self.answer_rects
    }

    /// `None` when the card did not fit the current terminal size.
    pub fn question_rect(&self, id: u32) -> Option<Rect> {
        self.question_rects
            .iter()
            .find(|(card_id, _)| *card_id == id)
            .map(|(_, rect)| *rect)
    }

    /// `None` when the label is unknown or its card did not fit.
    pub fn answer_rect(&self, label: &str) -> Option<Rect> {
        self.answer_rects
            .iter()
            .find(|(card_label, _)| card_label == label)
            .map(|(_, rect)| *rect)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        for (id, rect) in &self.question_rects {
            if rect.contains(position) {
                return Some(ClickTarget::Question(*id));
            }
        }
        for (label, rect) in &self.answer_rects {
            if rect.contains(position) {
                return Some(ClickTarget::Answer(label.clone()));
            }
        }
        if self.button_area.contains(position) {
            return Some(ClickTarget::Button);
        }
        None
    }
}

/// Stacks fixed-height card rects down a column, stopping at the first card
/// that would overflow it. Cards that don't fit are simply not measurable.
fn stack_cards(column: Rect, card_height: u16) -> impl Iterator<Item = Rect> {
    (0u16..).map_while(move |i| {
        let y = column.y + i * (card_height + CARD_GAP);
        if y + card_height <= column.bottom() {
            Some(Rect::new(column.x, y, column.width, card_height))
        } else {
            None
        }
    })
}
