//! Bottom bar: the keys that do something on the current screen.

use crate::screen::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SECONDARY_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

const QUIT: KeyHint = hint("q", "Quit");
const MENU: KeyHint = hint("m", "Menu");
const BACK: KeyHint = hint("Esc", "Back");
const MOVE: KeyHint = hint("↑/↓", "Move");

/// Hints for the open drawer, or for the active screen when it is closed.
pub fn key_hints(drawer_open: bool, screen: &Screen<'_>) -> Vec<KeyHint> {
    if drawer_open {
        return vec![MOVE, hint("Enter", "Select"), hint("Esc", "Close"), QUIT];
    }
    match screen {
        Screen::Home => vec![MENU, hint("c", "Cities"), QUIT],
        Screen::CityList { .. } => vec![MOVE, hint("Enter", "Open city"), BACK, MENU, QUIT],
        Screen::Video { .. } | Screen::Web { .. } => {
            vec![hint("Enter", "Open link"), BACK, MENU, hint("h", "Home"), QUIT]
        }
        Screen::CityOverview { .. } | Screen::Profile { .. } | Screen::Photos { .. } => {
            vec![BACK, MENU, hint("h", "Home"), hint("c", "Cities"), QUIT]
        }
    }
}

pub struct Footer {
    hints: Vec<KeyHint>,
}

impl Footer {
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT);
        let dim = Style::default().fg(SECONDARY_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, dim));
                used += SEPARATOR.chars().count();
            }
            spans.push(Span::styled(hint.key, key_style));
            spans.push(Span::styled(format!(": {}", hint.action), dim));
            used += hint.key.chars().count() + hint.action.chars().count() + 2;
        }

        // Right-align the version inside the borders when there is room.
        let version = format!("v{VERSION} ");
        let inner = area.width.saturating_sub(2) as usize;
        let padding = inner.saturating_sub(used + version.chars().count());
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(version, dim));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::nav::{InfoKind, Route};

    fn actions(hints: &[KeyHint]) -> Vec<&'static str> {
        hints.iter().map(|hint| hint.action).collect()
    }

    #[test]
    fn open_link_only_on_link_screens() {
        let catalog = Catalog::builtin();
        for kind in InfoKind::ALL {
            let route = Route::CityInfo("paris".to_string(), kind);
            let hints = key_hints(false, &Screen::resolve(&route, &catalog));
            let offers_link = actions(&hints).contains(&"Open link");
            assert_eq!(
                offers_link,
                matches!(kind, InfoKind::Video | InfoKind::Web),
                "{kind}"
            );
        }
    }

    #[test]
    fn open_drawer_overrides_screen_hints() {
        let catalog = Catalog::builtin();
        let screen = Screen::resolve(&Route::CityList, &catalog);
        let hints = key_hints(true, &screen);
        assert_eq!(actions(&hints), vec!["Move", "Select", "Close", "Quit"]);
    }

    #[test]
    fn city_list_offers_open_city() {
        let catalog = Catalog::builtin();
        let hints = key_hints(false, &Screen::resolve(&Route::CityList, &catalog));
        assert!(actions(&hints).contains(&"Open city"));
        assert!(!actions(&hints).contains(&"Open link"));
    }
}
