use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::{CARD_HEIGHT, CARD_WIDTH};

pub struct Regions {
    pub title: Rect,
    pub input: Rect,
    pub hint: Rect,
    pub results: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let [title, input, hint, results] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    Regions {
        title,
        input,
        hint,
        results,
    }
}

/// Lays out up to `count` cards row by row inside `area`.
///
/// Returns only the cards that fit; callers report the remainder.
pub fn card_grid(area: Rect, count: usize) -> Vec<Rect> {
    let columns = (area.width / CARD_WIDTH).max(1);
    let rows = area.height / CARD_HEIGHT;
    let capacity = usize::from(columns) * usize::from(rows);

    (0..count.min(capacity))
        .map(|index| {
            let column = (index % usize::from(columns)) as u16;
            let row = (index / usize::from(columns)) as u16;
            Rect {
                x: area.x + column * CARD_WIDTH,
                y: area.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT,
            }
        })
        .collect()
}
