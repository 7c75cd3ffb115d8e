use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use ratatui::Frame;

use crate::nav::{InfoKind, Router};
use crate::ui::layout::drawer_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DRAWER_BORDER, HEADER_TEXT, SECONDARY_TEXT};

use super::state::DrawerState;

pub fn render_drawer(frame: &mut Frame, area: Rect, state: &DrawerState, router: &Router) {
    let Some(cursor) = state.cursor() else {
        return;
    };

    let selection = router.selection();
    let mut items: Vec<ListItem> = router
        .catalog()
        .iter()
        .map(|city| {
            let name_style = if selection.is_selected(&city.id) {
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(city.name.as_str(), name_style),
                Span::styled(
                    format!("  {}", city.country),
                    Style::default().fg(SECONDARY_TEXT),
                ),
            ]))
        })
        .collect();

    items.extend(InfoKind::ALL.iter().enumerate().map(|(i, kind)| {
        let mut lines = Vec::new();
        if i == 0 {
            lines.push(Line::from(Span::styled(
                "Information",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", kind.label()),
            Style::default().fg(HEADER_TEXT),
        )));
        ListItem::new(lines)
    }));

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Travel Guide ", Style::default().fg(ACCENT)))
                .title_bottom(Span::styled(
                    " Discover amazing places ",
                    Style::default().fg(SECONDARY_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DRAWER_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let rect = drawer_rect(area);
    frame.render_widget(Clear, rect);
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, rect, &mut list_state);
}
