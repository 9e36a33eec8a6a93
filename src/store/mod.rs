//! State container for the users screen.
//!
//! `UsersState` is only ever changed by [`reduce`]; [`Store`] owns one state
//! value and serializes every change through [`Store::dispatch`]. Fields are
//! private so the memoized filtered list cannot drift from `users` and
//! `filters`.

mod reducer;

pub use reducer::{Action, reduce};

use crate::filter::FilterCriteria;
use crate::model::User;

/// Lifecycle of the user list request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    users: Vec<User>,
    filtered_users: Vec<User>,
    filters: FilterCriteria,
    status: RequestStatus,
}

impl UsersState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// `filter::apply(users, filters)`, kept in sync by the reducer.
    pub fn filtered_users(&self) -> &[User] {
        &self.filtered_users
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Owns the current [`UsersState`] and applies actions to it in order.
#[derive(Debug, Default)]
pub struct Store {
    state: UsersState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }
}
