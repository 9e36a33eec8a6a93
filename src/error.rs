//! Error and result types shared across the crate.
//!
//! Fetch failures are typed with `thiserror` because their message ends up
//! in application state and on screen. Everything around the event loop
//! (terminal, runtime, I/O) bubbles up as `anyhow::Error`.

use thiserror::Error;

/// Message shown when a failure carries no text of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch users";

pub type Result<T> = anyhow::Result<T>;

/// The single failure kind of the user list request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS or TLS failure before a response arrived.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of users.
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// Human-readable message stored in state and rendered on the error screen.
    pub fn user_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_FETCH_ERROR.to_string()
        } else {
            msg
        }
    }
}
