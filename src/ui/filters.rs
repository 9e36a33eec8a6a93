use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::filter::FilterField;

/// Four side-by-side inputs pre-filled with the current filter values.
pub fn render_filter_inputs(f: &mut Frame, area: Rect, app: &AppState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref())
        .split(area);

    let filters = app.store.state().filters();
    for (field, cell) in FilterField::ALL.iter().zip(cells.iter()) {
        let focused = *field == app.focus;
        let value = filters.get(*field);
        let (text, text_style) = if value.is_empty() {
            (field.placeholder(), Style::default().fg(app.theme.muted))
        } else {
            (value, Style::default().fg(app.theme.text))
        };
        let border = if focused { app.theme.accent } else { app.theme.border };

        let p = Paragraph::new(text.to_string()).style(text_style).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(p, *cell);

        if focused && !app.show_help {
            let inner_width = cell.width.saturating_sub(2);
            let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            let x = cell.x + 1 + typed.min(inner_width.saturating_sub(1));
            f.set_cursor_position((x, cell.y + 1));
        }
    }
}
