//! Shared UI components (status bar).
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::{AppState, InputMode};

/// Render the bottom status bar: mode, paging state and any fetch error.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let prev = if app.table.is_previous_disabled() { "←:–" } else { "←:prev" };
    let next = if app.table.is_next_disabled() { "→:–" } else { "→:next" };
    let status = format!(
        "mode: {mode}  page {}/{}  rows/page:{}  {prev} {next}",
        app.table.current_page(),
        app.table.total_pages().max(1),
        app.table.page_size(),
    );

    let mut spans = vec![Span::styled(
        status,
        Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg),
    )];
    if let Some(error) = app.table.error() {
        spans.push(Span::styled(
            format!("  {error}"),
            Style::default().fg(app.theme.error).bg(app.theme.status_bg),
        ));
    }
    let bar = ratatui::widgets::Paragraph::new(Line::from(spans))
        .style(Style::default().bg(app.theme.status_bg));
    f.render_widget(bar, area);
}
