use ratatui::layout::Rect;

/// Width of the drawer overlay, in columns.
pub const DRAWER_WIDTH: u16 = 36;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Drawer overlay: full height on the left edge.
pub fn drawer_rect(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: DRAWER_WIDTH.min(area.width),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn drawer_fits_narrow_terminals() {
        assert_eq!(drawer_rect(Rect::new(0, 0, 20, 10)).width, 20);
        assert_eq!(drawer_rect(Rect::new(0, 0, 120, 10)).width, DRAWER_WIDTH);
    }
}
