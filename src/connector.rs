use std::collections::BTreeMap;

use ratatui::layout::Rect;

use crate::ui::layout::BoardLayout;

/// A connector endpoint in board coordinates. X grows rightwards, y grows
/// downwards, matching terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// How a connector is drawn between its two anchors. The geometry of the
/// anchors themselves is style-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorStyle {
    Straight,
    #[default]
    Curved,
}

/// Sample count per curve half. Braille cells are small, so a handful of
/// segments already reads as smooth.
const CURVE_SEGMENTS: usize = 12;

impl ConnectorStyle {
    pub fn toggled(self) -> Self {
        match self {
            ConnectorStyle::Straight => ConnectorStyle::Curved,
            ConnectorStyle::Curved => ConnectorStyle::Straight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectorStyle::Straight => "straight",
            ConnectorStyle::Curved => "curved",
        }
    }

    /// Returns the points to join with line segments when painting the
    /// connector, starting exactly at `from` and ending exactly at `to`.
    pub fn polyline(self, from: Anchor, to: Anchor) -> Vec<Anchor> {
        match self {
            ConnectorStyle::Straight => vec![from, to],
            ConnectorStyle::Curved => curved_polyline(from, to),
        }
    }
}

/// An S-curve built from two quadratic halves: the control geometry passes
/// through the horizontal midpoint at the source's vertical level, then
/// mirrors for the second half down to the destination.
fn curved_polyline(from: Anchor, to: Anchor) -> Vec<Anchor> {
    let mid = Anchor {
        x: (from.x + to.x) / 2.0,
        y: (from.y + to.y) / 2.0,
    };
    let ctrl_a = Anchor { x: mid.x, y: from.y };
    let ctrl_b = Anchor { x: mid.x, y: to.y };

    let mut points = Vec::with_capacity(2 * CURVE_SEGMENTS + 1);
    for i in 0..=CURVE_SEGMENTS {
        let t = i as f64 / CURVE_SEGMENTS as f64;
        points.push(quad_point(from, ctrl_a, mid, t));
    }
    for i in 1..=CURVE_SEGMENTS {
        let t = i as f64 / CURVE_SEGMENTS as f64;
        points.push(quad_point(mid, ctrl_b, to, t));
    }
    points
}

fn quad_point(p0: Anchor, ctrl: Anchor, p1: Anchor, t: f64) -> Anchor {
    let u = 1.0 - t;
    Anchor {
        x: u * u * p0.x + 2.0 * u * t * ctrl.x + t * t * p1.x,
        y: u * u * p0.y + 2.0 * u * t * ctrl.y + t * t * p1.y,
    }
}

/// One drawn connector, anchored at the right-center edge of the matched
/// question card and the left-center edge of the matched answer card.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub question_id: u32,
    pub from: Anchor,
    pub to: Anchor,
}

/// Builds one connector per match whose endpoints are both measurable in the
/// given layout. Pairs referencing cards that did not fit on screen are
/// skipped; that is a transient layout state, not an error. Output order
/// follows the map's key order.
pub fn connectors(matches: &BTreeMap<u32, String>, layout: &BoardLayout) -> Vec<Connector> {
    matches
        .iter()
        .filter_map(|(id, label)| {
            let question = layout.question_rect(*id)?;
            let answer = layout.answer_rect(label)?;
            Some(Connector {
                question_id: *id,
                from: right_center(question),
                to: left_center(answer),
            })
        })
        .collect()
}

fn right_center(rect: Rect) -> Anchor {
    Anchor {
        x: f64::from(rect.right()),
        y: f64::from(rect.y) + f64::from(rect.height) / 2.0,
    }
}

fn left_center(rect: Rect) -> Anchor {
    Anchor {
        x: f64::from(rect.x),
        y: f64::from(rect.y) + f64::from(rect.height) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{answer_options, quiz_items};

    fn matches_from(pairs: &[(u32, &str)]) -> BTreeMap<u32, String> {
        pairs
            .iter()
            .map(|(id, label)| (*id, label.to_string()))
            .collect()
    }

    fn full_layout() -> BoardLayout {
        BoardLayout::compute(Rect::new(0, 0, 100, 40), &quiz_items(), &answer_options())
    }

    #[test]
    fn test_straight_polyline_is_the_two_anchors() {
        let from = Anchor { x: 1.0, y: 2.0 };
        let to = Anchor { x: 9.0, y: 7.0 };
        assert_eq!(ConnectorStyle::Straight.polyline(from, to), vec![from, to]);
    }

    #[test]
    fn test_curved_polyline_starts_and_ends_on_anchors() {
        let from = Anchor { x: 10.0, y: 5.0 };
        let to = Anchor { x: 40.0, y: 20.0 };
        let points = ConnectorStyle::Curved.polyline(from, to);
        assert!(points.len() > 2);
        assert_eq!(points[0], from);
        assert_eq!(*points.last().unwrap(), to);
    }

    #[test]
    fn test_curved_polyline_is_monotonic_in_x() {
        let from = Anchor { x: 10.0, y: 30.0 };
        let to = Anchor { x: 50.0, y: 4.0 };
        let points = ConnectorStyle::Curved.polyline(from, to);
        for pair in points.windows(2) {
            assert!(pair[1].x >= pair[0].x - 1e-9);
        }
    }

    #[test]
    fn test_curved_polyline_passes_through_the_midpoint() {
        let from = Anchor { x: 0.0, y: 0.0 };
        let to = Anchor { x: 20.0, y: 10.0 };
        let points = ConnectorStyle::Curved.polyline(from, to);
        assert!(points.contains(&Anchor { x: 10.0, y: 5.0 }));
    }

    #[test]
    fn test_style_toggle_flips_between_the_two_variants() {
        assert_eq!(
            ConnectorStyle::Straight.toggled(),
            ConnectorStyle::Curved
        );
        assert_eq!(
            ConnectorStyle::Curved.toggled(),
            ConnectorStyle::Straight
        );
    }

    #[test]
    fn test_one_connector_per_match_when_all_cards_fit() {
        let layout = full_layout();
        let matches = matches_from(&[
            (1, "Some other pattern"),
            (2, "Cyclic Sort"),
            (3, "Some other pattern"),
        ]);
        let connectors = connectors(&matches, &layout);
        assert_eq!(connectors.len(), matches.len());
    }

    #[test]
    fn test_connectors_anchor_on_card_edges() {
        let layout = full_layout();
        let matches = matches_from(&[(2, "Cyclic Sort")]);
        let connectors = connectors(&matches, &layout);
        assert_eq!(connectors.len(), 1);

        let question = layout.question_rect(2).unwrap();
        let answer = layout.answer_rect("Cyclic Sort").unwrap();
        let conn = &connectors[0];
        assert_eq!(conn.from.x, f64::from(question.right()));
        assert_eq!(conn.to.x, f64::from(answer.x));
        assert!(conn.from.x <= conn.to.x);
    }

    #[test]
    fn test_unmeasurable_cards_are_skipped() {
        // Tall enough for the first question card only.
        let layout =
            BoardLayout::compute(Rect::new(0, 0, 100, 18), &quiz_items(), &answer_options());
        let matches = matches_from(&[(1, "Cyclic Sort"), (4, "Cyclic Sort")]);
        let connectors = connectors(&matches, &layout);
        assert!(connectors.len() <= matches.len());
        assert!(connectors.iter().all(|c| c.question_id != 4));
    }

    #[test]
    fn test_unknown_match_entries_produce_no_connector() {
        let layout = full_layout();
        let matches = matches_from(&[(99, "Cyclic Sort"), (1, "No such label")]);
        assert!(connectors(&matches, &layout).is_empty());
    }
}
