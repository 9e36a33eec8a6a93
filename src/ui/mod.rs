pub mod components;
pub mod filters;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;
use crate::store::RequestStatus;

pub const TITLE: &str = "User Management Table";

pub fn render(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    // Loading and error screens show only their message.
    match app.store.state().status().clone() {
        RequestStatus::Loading => {
            render_message(f, area, "Loading users...", Style::default().fg(app.theme.title));
        }
        RequestStatus::Failed(message) => {
            render_message(
                f,
                area,
                &format!("Error: {message}"),
                Style::default().fg(app.theme.error),
            );
        }
        RequestStatus::Idle | RequestStatus::Loaded => render_table_screen(f, app),
    }
}

fn render_table_screen(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ].as_ref())
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.header_fg)
                .bg(app.theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(title, root[0]);

    filters::render_filter_inputs(f, root[1], app);
    users::render_users_table(f, root[2], app);
    components::render_status_bar(f, root[3], app);

    if app.show_help {
        components::render_help_modal(f, f.area(), app);
    }
}

fn render_message(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let rect = components::centered_rect(area.width, 3, area);
    let p = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(style);
    f.render_widget(p, rect);
}
