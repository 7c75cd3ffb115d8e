use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, SECONDARY_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: menu glyph plus the current title.
pub struct Header {
    title: String,
    drawer_open: bool,
}

impl Header {
    pub fn new(title: String, drawer_open: bool) -> Self {
        Self { title, drawer_open }
    }

    pub fn widget(&self) -> Paragraph<'_> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let menu = if self.drawer_open { "✕" } else { "☰" };
        let line = Line::from(vec![
            Span::styled(format!(" {menu} "), Style::default().fg(SECONDARY_TEXT)),
            Span::styled(
                self.title.as_str(),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
