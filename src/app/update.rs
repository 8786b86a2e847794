use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{info, warn};

use crate::api::{self, FetchOutcome, HttpUserSource, UserSource};
use crate::app::{AppState, InputMode};
use crate::table::SortColumn;
use crate::ui;

/// What a key press asks the loop to do beyond mutating state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Reload,
    Quit,
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    page_size: usize,
    source: HttpUserSource,
) -> Result<()> {
    let mut app = AppState::new(page_size);
    let (tx, rx) = mpsc::channel::<FetchOutcome>();

    start_load(&mut app, &source, &tx);

    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        // Results from in-flight fetches; overlapping loads race and the
        // last one to arrive wins.
        while let Ok(outcome) = rx.try_recv() {
            apply_fetch_outcome(&mut app, outcome);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(&mut app, key.code) {
                        Signal::Quit => break,
                        Signal::Reload => start_load(&mut app, &source, &tx),
                        Signal::Continue => {}
                    }
                }
            }
        }
    }

    info!(uptime_secs = app.started_at.elapsed().as_secs(), "exiting");
    Ok(())
}

fn start_load<S>(app: &mut AppState, source: &S, tx: &mpsc::Sender<FetchOutcome>)
where
    S: UserSource + Clone + Send + 'static,
{
    info!("loading users");
    app.table.begin_load();
    api::fetch_in_background(source, tx);
}

fn apply_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) {
    match &outcome {
        Ok(records) => info!(count = records.len(), "users loaded"),
        Err(e) => warn!(error = %e, "load failed"),
    }
    app.table.finish_load(outcome.map_err(|e| e.0));
    app.selected_row = 0;
}

/// Dispatch a key press according to the current input mode.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> Signal {
    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, code),
        InputMode::Search => handle_search_key(app, code),
    }
}

fn handle_normal_key(app: &mut AppState, code: KeyCode) -> Signal {
    match code {
        KeyCode::Char('q') => return Signal::Quit,
        KeyCode::Char('r') => return Signal::Reload,
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.table.previous_page();
            app.selected_row = 0;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.table.next_page();
            app.selected_row = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.selected_row > 0 {
                app.selected_row -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.selected_row + 1 < app.table.page().len() {
                app.selected_row += 1;
            }
        }
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            if let Some(&column) = SortColumn::ALL.get(index) {
                app.table.toggle_sort(column);
                app.selected_row = 0;
            }
        }
        _ => {}
    }
    Signal::Continue
}

/// Search edits apply per keystroke, so each change re-filters immediately
/// and resets the page. Enter keeps the term; Esc clears it.
fn handle_search_key(app: &mut AppState, code: KeyCode) -> Signal {
    match code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.table.set_search_term("");
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            let mut term = app.table.search_term().to_string();
            term.pop();
            app.table.set_search_term(term);
            app.selected_row = 0;
        }
        KeyCode::Char(c) => {
            let mut term = app.table.search_term().to_string();
            term.push(c);
            app.table.set_search_term(term);
            app.selected_row = 0;
        }
        _ => {}
    }
    Signal::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::model::{Address, Company, Geo, User};

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: format!("u{id}"),
            email: format!("{name}@example.com"),
            phone: String::new(),
            website: String::new(),
            address: Address {
                street: String::new(),
                suite: String::new(),
                city: String::new(),
                zipcode: String::new(),
                geo: Geo { lat: String::new(), lng: String::new() },
            },
            company: Company {
                name: String::new(),
                catch_phrase: String::new(),
                bs: String::new(),
            },
        }
    }

    fn app_with(names: &[&str], page_size: usize) -> AppState {
        let mut app = AppState::with_theme(page_size, Theme::mocha());
        let records = names
            .iter()
            .enumerate()
            .map(|(i, n)| user(i as u64 + 1, n))
            .collect();
        app.table.finish_load(Ok(records));
        app
    }

    #[test]
    fn q_quits_and_r_reloads_in_normal_mode() {
        let mut app = app_with(&["Alice"], 5);
        assert_eq!(handle_key(&mut app, KeyCode::Char('q')), Signal::Quit);
        assert_eq!(handle_key(&mut app, KeyCode::Char('r')), Signal::Reload);
    }

    #[test]
    fn search_mode_edits_term_per_keystroke() {
        let mut app = app_with(&["Alice", "Bob"], 5);
        handle_key(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);
        handle_key(&mut app, KeyCode::Char('b'));
        handle_key(&mut app, KeyCode::Char('o'));
        assert_eq!(app.table.search_term(), "bo");
        assert_eq!(app.table.filtered().len(), 1);
        handle_key(&mut app, KeyCode::Backspace);
        assert_eq!(app.table.search_term(), "b");
        handle_key(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.table.search_term(), "b");
    }

    #[test]
    fn esc_clears_the_search_term() {
        let mut app = app_with(&["Alice"], 5);
        handle_key(&mut app, KeyCode::Char('/'));
        handle_key(&mut app, KeyCode::Char('x'));
        handle_key(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.table.search_term(), "");
    }

    #[test]
    fn digit_keys_toggle_sort_columns() {
        let mut app = app_with(&["Bob", "Alice"], 5);
        handle_key(&mut app, KeyCode::Char('2'));
        assert_eq!(
            app.table.sort().direction_for(SortColumn::Name),
            Some(crate::table::SortDirection::Ascending)
        );
        handle_key(&mut app, KeyCode::Char('2'));
        assert_eq!(
            app.table.sort().direction_for(SortColumn::Name),
            Some(crate::table::SortDirection::Descending)
        );
    }

    #[test]
    fn selection_stays_within_the_page() {
        let mut app = app_with(&["A", "B", "C"], 2);
        handle_key(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row, 1);
        handle_key(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row, 1);
        handle_key(&mut app, KeyCode::Right);
        assert_eq!(app.table.current_page(), 2);
        assert_eq!(app.selected_row, 0);
        handle_key(&mut app, KeyCode::Down);
        assert_eq!(app.selected_row, 0);
    }
}
