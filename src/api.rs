//! Fetch collaborator for the user directory.
//!
//! One operation: retrieve every record, or fail with a single human-readable
//! message. Transport failures are translated here; the table layer never
//! interprets them beyond displaying the text.
use std::fmt::{Display, Formatter};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::model::User;

/// A failed fetch, carrying only the message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchError(pub String);

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FetchError {}

/// Result of one load attempt, as delivered to the event loop.
pub type FetchOutcome = Result<Vec<User>, FetchError>;

/// Source of user records. The HTTP implementation below is the real one;
/// tests substitute their own.
pub trait UserSource {
    fn fetch_users(&self) -> FetchOutcome;
}

/// Fetches `GET {base_url}/users` and decodes the JSON array.
#[derive(Clone)]
pub struct HttpUserSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpUserSource {
    /// The request timeout is owned here; the table layer assumes none.
    pub fn new(base_url: impl Into<String>) -> crate::error::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl UserSource for HttpUserSource {
    fn fetch_users(&self) -> FetchOutcome {
        let response = self
            .client
            .get(self.users_url())
            .send()
            .map_err(transport_message)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_message(status));
        }

        response
            .json::<Vec<User>>()
            .map_err(|_| FetchError("Something went wrong. Please try again later.".to_string()))
    }
}

fn transport_message(err: reqwest::Error) -> FetchError {
    let text = if err.is_connect() {
        "Cannot reach the server."
    } else if err.is_timeout() {
        "The server took too long to respond."
    } else {
        "Network error. Check your connection."
    };
    FetchError(text.to_string())
}

fn status_message(status: reqwest::StatusCode) -> FetchError {
    let text = match status.as_u16() {
        404 => "Resource not found.".to_string(),
        500 => "Internal server error.".to_string(),
        code => format!(
            "{}: {}",
            code,
            status.canonical_reason().unwrap_or("request failed")
        ),
    };
    FetchError(text)
}

/// Run one fetch on a worker thread and deliver the outcome over `tx`.
///
/// Overlapping calls share the channel and race; the event loop applies
/// results in arrival order, so the last one to resolve wins. The send fails
/// only when the receiver is gone, i.e. the app is shutting down.
pub fn fetch_in_background<S>(source: &S, tx: &Sender<FetchOutcome>)
where
    S: UserSource + Clone + Send + 'static,
{
    let source = source.clone();
    let tx = tx.clone();
    thread::spawn(move || {
        let outcome = source.fetch_users();
        let _ = tx.send(outcome);
    });
}
