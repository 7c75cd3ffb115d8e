use crate::ui::app::App;
use crate::ui::drawer::render_drawer;
use crate::ui::footer::{key_hints, Footer};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens::render_screen;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.title(), app.drawer().is_open());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    render_screen(frame, body, app);

    let footer_widget = Footer::new(key_hints(app.drawer().is_open(), &app.screen()));
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.drawer().is_open() {
        render_drawer(frame, area, app.drawer(), app.router());
    }
}
