//! Records table and the details panel for the selected row.
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::AppState;
use crate::table::{SortColumn, SortDirection};

/// Columns shown in the table body, in display order. Sorting covers the
/// full `SortColumn::ALL` set; the table shows the subset that fits.
const VISIBLE: [SortColumn; 6] = [
    SortColumn::Id,
    SortColumn::Name,
    SortColumn::Username,
    SortColumn::Email,
    SortColumn::City,
    SortColumn::Company,
];

fn header_label(app: &AppState, column: SortColumn) -> String {
    match app.table.sort().direction_for(column) {
        Some(SortDirection::Ascending) => format!("{} ▲", column.label()),
        Some(SortDirection::Descending) => format!("{} ▼", column.label()),
        None => column.label().to_string(),
    }
}

pub fn render_records_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let page = app.table.page();
    if app.selected_row >= page.len() {
        app.selected_row = page.len().saturating_sub(1);
    }

    let rows = page.iter().enumerate().map(|(i, u)| {
        let style = if i == app.selected_row {
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(vec![
            Cell::from(u.id.to_string()),
            Cell::from(u.name.clone()),
            Cell::from(u.username.clone()),
            Cell::from(u.email.clone()),
            Cell::from(u.address.city.clone()),
            Cell::from(u.company.name.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(22),
        Constraint::Percentage(16),
        Constraint::Percentage(26),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
    ];
    let header = Row::new(VISIBLE.map(|c| header_label(app, c)).to_vec()).style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );

    let title = if app.table.loading() {
        "Users (loading…)".to_string()
    } else {
        format!(
            "Users — page {}/{}",
            app.table.current_page(),
            app.table.total_pages().max(1)
        )
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

pub fn render_record_details(f: &mut Frame, area: Rect, app: &AppState) {
    let text = match app.table.page().get(app.selected_row) {
        Some(u) => format!(
            "Name: {}\nUsername: {}\nEmail: {}\nPhone: {}\nWebsite: {}\n\n\
             Address: {}, {}\n{} {}\nGeo: {}, {}\n\n\
             Company: {}\n\"{}\"\n{}",
            u.name,
            u.username,
            u.email,
            u.phone,
            u.website,
            u.address.street,
            u.address.suite,
            u.address.zipcode,
            u.address.city,
            u.address.geo.lat,
            u.address.geo.lng,
            u.company.name,
            u.company.catch_phrase,
            u.company.bs,
        ),
        None if app.table.loading() => "Loading…".to_string(),
        None => "No records".to_string(),
    };

    let details = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(details, area);
}
