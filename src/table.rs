//! Table controller: the in-memory search/sort/pagination state machine.
//!
//! Holds the loaded records plus the current search term, sort state and page
//! number, and derives the visible slice from them on every read. Derived
//! views are never stored, so they cannot drift out of sync with their
//! inputs.
use crate::model::User;

/// Rows shown per page unless overridden on the command line.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Closed set of sortable columns.
///
/// Sorting goes through [`SortColumn::key_of`] rather than any dynamic field
/// lookup, so adding a column means adding a variant here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Username,
    Email,
    Phone,
    Website,
    City,
    Company,
}

impl SortColumn {
    /// All columns in display order; digit keys in the UI index into this.
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Username,
        SortColumn::Email,
        SortColumn::Phone,
        SortColumn::Website,
        SortColumn::City,
        SortColumn::Company,
    ];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "NAME",
            SortColumn::Username => "USERNAME",
            SortColumn::Email => "EMAIL",
            SortColumn::Phone => "PHONE",
            SortColumn::Website => "WEBSITE",
            SortColumn::City => "CITY",
            SortColumn::Company => "COMPANY",
        }
    }

    /// The comparison key for this column, as its string representation.
    pub fn key_of(self, user: &User) -> String {
        match self {
            SortColumn::Id => user.id.to_string(),
            SortColumn::Name => user.name.clone(),
            SortColumn::Username => user.username.clone(),
            SortColumn::Email => user.email.clone(),
            SortColumn::Phone => user.phone.clone(),
            SortColumn::Website => user.website.clone(),
            SortColumn::City => user.address.city.clone(),
            SortColumn::Company => user.company.name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction, or no sort applied.
///
/// Encoding both in one variant keeps the invariant "direction exists iff a
/// column is active" out of reach of callers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    By {
        column: SortColumn,
        direction: SortDirection,
    },
}

impl SortState {
    /// Three-way toggle: a new column starts ascending, repeating a column
    /// flips its direction.
    pub fn toggled(self, column: SortColumn) -> SortState {
        let direction = match self {
            SortState::By { column: active, direction: SortDirection::Ascending }
                if active == column =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        SortState::By { column, direction }
    }

    /// Direction for `column` if it is the active sort column.
    pub fn direction_for(self, column: SortColumn) -> Option<SortDirection> {
        match self {
            SortState::By { column: active, direction } if active == column => Some(direction),
            _ => None,
        }
    }
}

/// Reactive state for the records table.
///
/// Mutations happen through the operations below; everything visible
/// (filtered/sorted/paginated views, disabled flags) is recomputed from the
/// current state when read.
pub struct TableController {
    records: Vec<User>,
    loading: bool,
    error: Option<String>,
    search_term: String,
    sort: SortState,
    current_page: usize,
    page_size: usize,
}

impl TableController {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            search_term: String::new(),
            sort: SortState::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Mark a load attempt as started: loading on, previous error cleared.
    /// Records, search term, sort and page are left untouched.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a load attempt. Success replaces the records
    /// wholesale; failure stores the message and keeps whatever records the
    /// last successful load produced.
    pub fn finish_load(&mut self, outcome: Result<Vec<User>, String>) {
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Store the search term verbatim and jump back to the first page.
    /// Trimming and lowercasing happen at match time, not at storage time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Toggle sorting on `column` and jump back to the first page.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = self.sort.toggled(column);
        self.current_page = 1;
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records loaded, before any filtering.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Records whose name contains the trimmed, lowercased search term.
    /// An empty term keeps the full list in original order.
    pub fn filtered(&self) -> Vec<&User> {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            self.records.iter().collect()
        } else {
            self.records
                .iter()
                .filter(|u| u.name.to_lowercase().contains(&term))
                .collect()
        }
    }

    /// Filtered records ordered by the active sort column.
    ///
    /// Keys are compared lowercased; `sort_by` is stable, and descending
    /// negates the comparison instead of reversing the output, so equal keys
    /// keep their filtered-list order in both directions.
    pub fn sorted(&self) -> Vec<&User> {
        let mut rows = self.filtered();
        if let SortState::By { column, direction } = self.sort {
            let mut keyed: Vec<(String, &User)> = rows
                .into_iter()
                .map(|u| (column.key_of(u).to_lowercase(), u))
                .collect();
            keyed.sort_by(|a, b| {
                let ord = a.0.cmp(&b.0);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
            rows = keyed.into_iter().map(|(_, u)| u).collect();
        }
        rows
    }

    /// The slice of the sorted list visible on the current page.
    pub fn page(&self) -> Vec<&User> {
        let sorted = self.sorted();
        sorted
            .into_iter()
            .skip((self.current_page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Ceiling division of the sorted-list length by the page size;
    /// 0 when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.sorted().len().div_ceil(self.page_size)
    }

    pub fn is_previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_next_disabled(&self) -> bool {
        let total = self.total_pages();
        total == 0 || self.current_page == total
    }
}
