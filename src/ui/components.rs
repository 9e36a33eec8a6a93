//! Shared UI components (status bar, help overlay, layout helpers).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::app::keymap::format_action;
use crate::store::RequestStatus;

/// Render the bottom status bar with request status and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let state = app.store.state();
    let status = match state.status() {
        RequestStatus::Idle => "IDLE",
        RequestStatus::Loading => "LOADING",
        RequestStatus::Loaded => "LOADED",
        RequestStatus::Failed(_) => "FAILED",
    };
    let active = state.filters().active_count();
    let filters = if active == 0 {
        String::new()
    } else {
        format!("  filters:{active}")
    };
    let msg = format!(
        "status: {status}  shown:{}/{}{}  focus:{}  F1: help",
        state.filtered_users().len(),
        state.users().len(),
        filters,
        app.focus.label(),
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the help overlay listing every keybinding.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let bindings = app.keymap.all_bindings();
    let width = 56u16.min(area.width.saturating_sub(4)).max(30);
    let wanted = u16::try_from(bindings.len() + 6).unwrap_or(u16::MAX);
    let height = wanted.min(area.height.saturating_sub(2)).max(8);
    let rect = centered_rect(width, height, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Type to filter the focused column",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("Phone accepts digits only"),
        Line::raw(""),
    ];
    for (key, action) in bindings {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<18}", format_action(action))),
            Span::styled(key, Style::default().add_modifier(Modifier::ITALIC)),
        ]));
    }

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
