//! Body renderers, one per screen variant.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::assets::{AssetProvider, AssetStatus};
use crate::catalog::{City, ImageRef};
use crate::screen::Screen;
use crate::ui::app::App;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, SECONDARY_TEXT, STATUS_ERROR,
    STATUS_OK, TAG_BG,
};

/// Highlight tags per row on the overview.
const TAGS_PER_ROW: usize = 3;

pub fn render_screen(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    match screen {
        Screen::Home => render_home(frame, area),
        Screen::CityList { cities } => render_city_list(frame, area, cities, app.list_cursor()),
        Screen::CityOverview { city } => render_overview(frame, area, city),
        Screen::Profile { city } => {
            render_text(frame, area, &screen.heading(), vec![Line::from(city.description.as_str())])
        }
        Screen::Photos { photos, .. } => {
            render_text(frame, area, &screen.heading(), photo_lines(photos, app.assets()))
        }
        Screen::Video { url, .. } => {
            render_text(frame, area, &screen.heading(), action_lines("Watch video", url))
        }
        Screen::Web { url, .. } => {
            render_text(frame, area, &screen.heading(), action_lines("Open website", url))
        }
    }
}

/// One line per photo reference; an empty sequence yields no lines.
pub fn photo_lines(photos: &[ImageRef], assets: &dyn AssetProvider) -> Vec<Line<'static>> {
    photos
        .iter()
        .map(|photo| {
            let (marker, color) = match assets.lookup(photo) {
                AssetStatus::Available(_) => ("●", STATUS_OK),
                AssetStatus::Missing => ("✕", STATUS_ERROR),
                AssetStatus::Unresolved => ("○", SECONDARY_TEXT),
            };
            Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(color)),
                Span::styled(photo.as_str().to_string(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect()
}

/// Highlights laid out as tag rows.
pub fn highlight_rows(highlights: &[String]) -> Vec<Line<'static>> {
    highlights
        .chunks(TAGS_PER_ROW)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for tag in row {
                spans.push(Span::styled(
                    format!(" {tag} "),
                    Style::default().fg(HEADER_TEXT).bg(TAG_BG),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect()
}

fn action_lines(label: &str, url: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("▶ ", Style::default().fg(ACCENT)),
            Span::styled(
                label.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Enter]", Style::default().fg(SECONDARY_TEXT)),
        ]),
        Line::from(Span::styled(
            format!("  {url}"),
            Style::default().fg(SECONDARY_TEXT),
        )),
    ]
}

fn render_home(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to the Travel Guide",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press m for the menu or c to browse cities.",
            Style::default().fg(SECONDARY_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(padded_block()), area);
}

fn render_city_list(frame: &mut Frame, area: Rect, cities: &[City], cursor: usize) {
    let items: Vec<ListItem> = cities
        .iter()
        .map(|city| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    city.name.as_str(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    city.country.as_str(),
                    Style::default().fg(SECONDARY_TEXT),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(padded_block().title(" Cities "))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_overview(frame: &mut Frame, area: Rect, city: &City) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            city.name.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("⌖ {}", city.country),
            Style::default().fg(SECONDARY_TEXT),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(GLOBAL_BORDER)));
    frame.render_widget(banner, chunks[0]);

    let mut lines = Vec::new();
    section(&mut lines, &format!("About {}", city.name), &city.description);
    section(&mut lines, "Visiting Hours", &city.hours);
    section(&mut lines, "Best Time", &city.best_time);
    lines.push(section_title("Highlights"));
    lines.extend(highlight_rows(&city.highlights));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(padded_block()),
        chunks[1],
    );
}

fn render_text(frame: &mut Frame, area: Rect, heading: &str, body: Vec<Line<'_>>) {
    let mut lines = vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(padded_block()),
        area,
    );
}

fn section(lines: &mut Vec<Line<'static>>, title: &str, content: &str) {
    lines.push(section_title(title));
    lines.push(Line::from(Span::styled(
        content.to_string(),
        Style::default().fg(SECONDARY_TEXT),
    )));
    lines.push(Line::from(""));
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn padded_block() -> Block<'static> {
    Block::default().borders(Borders::NONE).padding(ratatui::widgets::Padding::horizontal(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DirAssetProvider;

    #[test]
    fn no_photos_renders_no_lines() {
        let lines = photo_lines(&[], &DirAssetProvider::default());
        assert!(lines.is_empty());
    }

    #[test]
    fn one_line_per_photo() {
        let photos = vec![ImageRef::new("a.jpg"), ImageRef::new("b.jpg")];
        assert_eq!(photo_lines(&photos, &DirAssetProvider::default()).len(), 2);
    }

    #[test]
    fn highlights_wrap_three_per_row() {
        let highlights: Vec<String> = (0..5).map(|i| format!("h{i}")).collect();
        assert_eq!(highlight_rows(&highlights).len(), 2);
        assert!(highlight_rows(&[]).is_empty());
    }
}
