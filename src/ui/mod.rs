pub mod components;
pub mod table;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)].as_ref())
        .split(root[1]);

    let prompt = match app.input_mode {
        InputMode::Normal => {
            if app.table.search_term().is_empty() {
                String::new()
            } else {
                format!("  search: {}", app.table.search_term())
            }
        }
        InputMode::Search => format!("  Search: {}_", app.table.search_term()),
    };
    let header = Paragraph::new(format!(
        "usertable{prompt}  records:{}  — /: search; 1-8: sort; ←/→: page; r: reload; q: quit",
        app.table.record_count()
    ))
    .block(
        Block::default()
            .title("usertable")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg));
    f.render_widget(header, root[0]);

    table::render_records_table(f, body[0], app);
    table::render_record_details(f, body[1], app);

    components::render_status_bar(f, root[2], app);
}
