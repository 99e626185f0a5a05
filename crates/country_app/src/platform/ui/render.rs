use country_core::{AppViewModel, CountryCardView, ResultView};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::card::card_lines;
use super::constants::{HINT, INPUT_PLACEHOLDER, LOADING_TEXT, TITLE};
use super::layout::{card_grid, regions};

pub fn draw(frame: &mut Frame<'_>, view: &AppViewModel) {
    let regions = regions(frame.area());

    frame.render_widget(
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        regions.title,
    );

    let input = if view.query.is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(view.query.as_str())
    };
    frame.render_widget(input.block(Block::bordered().title("Search")), regions.input);
    frame.set_cursor_position(input_cursor(regions.input, &view.query));

    frame.render_widget(
        Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
        regions.hint,
    );

    match &view.status {
        ResultView::Idle => {}
        ResultView::Loading => {
            centered_line(frame, regions.results, LOADING_TEXT, Style::default())
        }
        ResultView::Error(message) => centered_line(
            frame,
            regions.results,
            message,
            Style::default().fg(Color::Red),
        ),
        ResultView::Results(cards) => draw_cards(frame, regions.results, cards),
    }
}

/// Cursor just after the typed text, clamped to the inside of the input box.
fn input_cursor(input: Rect, query: &str) -> (u16, u16) {
    let typed = u16::try_from(Line::raw(query).width()).unwrap_or(u16::MAX);
    let x = input.x.saturating_add(1).saturating_add(typed);
    let max_x = input.right().saturating_sub(2);
    (x.min(max_x), input.y.saturating_add(1))
}

fn centered_line(frame: &mut Frame<'_>, area: Rect, text: &str, style: Style) {
    let line = Rect {
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(text.to_string())
            .alignment(Alignment::Center)
            .style(style),
        line,
    );
}

fn draw_cards(frame: &mut Frame<'_>, area: Rect, cards: &[CountryCardView]) {
    let cells = card_grid(area, cards.len());
    for (card, cell) in cards.iter().zip(cells.iter()) {
        let lines = card_lines(card).into_iter().map(Line::from).collect::<Vec<_>>();
        let block = Block::bordered().title(Line::from(card.name.clone()).bold());
        frame.render_widget(Paragraph::new(lines).block(block), *cell);
    }

    let hidden = cards.len() - cells.len();
    if hidden > 0 && area.height > 0 {
        let footer = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(format!("{hidden} more not shown; enlarge the terminal"))
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_core::{update, AppState, Country, Currency, Msg, SearchOutcome};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, view)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn france() -> Country {
        Country {
            name: "France".to_string(),
            flag_url: "f.svg".to_string(),
            capital: Some("Paris".to_string()),
            population: 67_000_000,
            region: Some("Europe".to_string()),
            currencies: vec![Currency {
                name: "Euro".to_string(),
                symbol: Some("€".to_string()),
            }],
            languages: vec!["French".to_string()],
        }
    }

    fn searched(query: &str) -> AppState {
        let (state, _) = update(AppState::new(), Msg::InputChanged(query.to_string()));
        update(state, Msg::SearchSubmitted).0
    }

    #[test]
    fn cursor_follows_display_width() {
        let input = Rect::new(0, 1, 40, 3);
        assert_eq!(input_cursor(input, ""), (1, 2));
        assert_eq!(input_cursor(input, "Perú"), (5, 2));
        // Wide characters take two cells each.
        assert_eq!(input_cursor(input, "日本"), (5, 2));
    }

    #[test]
    fn cursor_is_clamped_for_huge_queries() {
        let input = Rect::new(0, 1, 40, 3);
        let huge = "a".repeat(usize::from(u16::MAX));
        assert_eq!(input_cursor(input, &huge), (38, 2));
        assert_eq!(input_cursor(input, &"a".repeat(200_000)), (38, 2));
    }

    #[test]
    fn idle_screen_shows_placeholder() {
        let text = screen_text(&AppState::new().view());
        assert!(text.contains(INPUT_PLACEHOLDER));
        assert!(!text.contains(LOADING_TEXT));
    }

    #[test]
    fn loading_screen_shows_indicator_only() {
        let text = screen_text(&searched("France").view());
        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains("Capital:"));
    }

    #[test]
    fn france_card_is_rendered() {
        let (state, _) = update(
            searched("France"),
            Msg::SearchSettled {
                request_id: 1,
                outcome: SearchOutcome::Found(vec![france()]),
            },
        );
        let text = screen_text(&state.view());

        assert!(text.contains("France"));
        assert!(text.contains("Capital: Paris"));
        assert!(text.contains("Population: 67,000,000"));
        assert!(text.contains("Region: Europe"));
        assert!(text.contains("Currency: Euro - €"));
        assert!(text.contains("Language: French"));
    }

    #[test]
    fn error_line_replaces_results() {
        let state = searched("   ");
        let text = screen_text(&state.view());

        assert!(text.contains("The input field cannot be empty"));
        assert!(!text.contains(LOADING_TEXT));
    }

    #[test]
    fn overflow_is_reported() {
        let many = (0..20)
            .map(|index| Country {
                name: format!("Country {index}"),
                ..france()
            })
            .collect();
        let (state, _) = update(
            searched("land"),
            Msg::SearchSettled {
                request_id: 1,
                outcome: SearchOutcome::Found(many),
            },
        );
        let text = screen_text(&state.view());

        assert!(text.contains("more not shown"));
    }
}
