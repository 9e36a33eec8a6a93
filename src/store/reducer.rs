//! Pure `(state, action) -> state` transitions.

use tracing::{debug, info, warn};

use super::{RequestStatus, UsersState};
use crate::error::{FetchError, GENERIC_FETCH_ERROR};
use crate::filter::{self, FilterField};
use crate::model::User;

/// Everything that can change [`UsersState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FetchStarted,
    FetchSucceeded(Vec<User>),
    FetchFailed(String),
    SetFilter { field: FilterField, value: String },
}

impl Action {
    /// Map a settled request onto the matching action.
    pub fn from_fetch(result: Result<Vec<User>, FetchError>) -> Self {
        match result {
            Ok(users) => Action::FetchSucceeded(users),
            Err(err) => Action::FetchFailed(err.user_message()),
        }
    }
}

pub fn reduce(mut state: UsersState, action: Action) -> UsersState {
    match action {
        Action::FetchStarted => {
            info!("fetching users");
            state.status = RequestStatus::Loading;
        }
        Action::FetchSucceeded(users) => {
            info!(count = users.len(), "users loaded");
            state.status = RequestStatus::Loaded;
            state.users = users;
            state.filtered_users = filter::apply(&state.users, &state.filters);
        }
        Action::FetchFailed(message) => {
            let message = if message.trim().is_empty() {
                GENERIC_FETCH_ERROR.to_string()
            } else {
                message
            };
            warn!(error = %message, "fetching users failed");
            state.status = RequestStatus::Failed(message);
        }
        Action::SetFilter { field, value } => {
            state.filters.set(field, value);
            state.filtered_users = filter::apply(&state.users, &state.filters);
            debug!(
                ?field,
                value = state.filters.get(field),
                shown = state.filtered_users.len(),
                "filter updated"
            );
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
        }
    }

    fn ervin() -> User {
        User {
            id: 2,
            name: "Ervin Howell".to_string(),
            username: "Antonette".to_string(),
            email: "Shanna@melissa.tv".to_string(),
            phone: "010-692-6593 x09125".to_string(),
        }
    }

    fn set(field: FilterField, value: &str) -> Action {
        Action::SetFilter {
            field,
            value: value.to_string(),
        }
    }

    fn loaded(users: Vec<User>) -> UsersState {
        let s = reduce(UsersState::default(), Action::FetchStarted);
        reduce(s, Action::FetchSucceeded(users))
    }

    #[test]
    fn fetch_started_sets_loading_and_clears_error() {
        let failed = reduce(UsersState::default(), Action::FetchFailed("boom".into()));
        assert_eq!(failed.error(), Some("boom"));

        let s = reduce(failed, Action::FetchStarted);
        assert!(s.is_loading());
        assert_eq!(s.error(), None);
    }

    #[test]
    fn fetch_success_fills_users_and_filtered() {
        let s = loaded(vec![leanne()]);
        assert_eq!(s.status(), &RequestStatus::Loaded);
        assert!(!s.is_loading());
        assert_eq!(s.error(), None);
        assert_eq!(s.users(), &[leanne()]);
        assert_eq!(s.filtered_users(), &[leanne()]);
        assert_eq!(s.filters(), &FilterCriteria::default());
        // with empty filters, re-applying them equals resetting to the full list
        assert_eq!(s.filtered_users(), s.users());
    }

    #[test]
    fn refetch_replaces_users_wholesale() {
        let s = loaded(vec![leanne(), ervin()]);
        let s = reduce(s, Action::FetchStarted);
        let s = reduce(s, Action::FetchSucceeded(vec![ervin()]));
        assert_eq!(s.users(), &[ervin()]);
        assert_eq!(s.filtered_users(), &[ervin()]);
    }

    #[test]
    fn fetch_success_keeps_filters_and_applies_them() {
        let s = reduce(UsersState::default(), set(FilterField::Name, "ervin"));
        let s = reduce(s, Action::FetchStarted);
        let s = reduce(s, Action::FetchSucceeded(vec![leanne(), ervin()]));
        assert_eq!(s.filters().name, "ervin");
        assert_eq!(s.users().len(), 2);
        assert_eq!(s.filtered_users(), &[ervin()]);
    }

    #[test]
    fn fetch_failure_leaves_users_untouched() {
        let before = loaded(vec![leanne()]);
        let s = reduce(before.clone(), Action::FetchStarted);
        let s = reduce(s, Action::FetchFailed("Network Error".into()));
        assert!(!s.is_loading());
        assert_eq!(s.error(), Some("Network Error"));
        assert_eq!(s.users(), before.users());
        assert_eq!(s.filtered_users(), before.filtered_users());
    }

    #[test]
    fn empty_failure_message_falls_back_to_generic() {
        let s = reduce(UsersState::default(), Action::FetchFailed("  ".into()));
        assert_eq!(s.error(), Some(GENERIC_FETCH_ERROR));
    }

    #[test]
    fn from_fetch_maps_errors_to_messages() {
        let a = Action::from_fetch(Err(FetchError::Status { status: 404 }));
        assert_eq!(
            a,
            Action::FetchFailed("Request failed with status code 404".to_string())
        );
        assert_eq!(
            Action::from_fetch(Ok(vec![leanne()])),
            Action::FetchSucceeded(vec![leanne()])
        );
    }

    #[test]
    fn set_filter_matches_case_insensitively_then_empties() {
        let s = loaded(vec![leanne()]);
        let s = reduce(s, set(FilterField::Name, "leanne"));
        assert_eq!(s.filtered_users().len(), 1);
        let s = reduce(s, set(FilterField::Name, "zzz"));
        assert!(s.filtered_users().is_empty());
        assert_eq!(s.users().len(), 1);
    }

    #[test]
    fn set_filter_with_current_value_is_noop() {
        let s = loaded(vec![leanne(), ervin()]);
        let s = reduce(s, set(FilterField::Email, "biz"));
        let again = reduce(s.clone(), set(FilterField::Email, "biz"));
        assert_eq!(again, s);
    }

    #[test]
    fn filtered_is_stable_subset_of_users() {
        let s = loaded(vec![ervin(), leanne()]);
        let s = reduce(s, set(FilterField::Phone, "0"));
        let ids: Vec<u64> = s.filtered_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(
            s.filtered_users()
                .iter()
                .all(|f| s.users().iter().any(|u| u.id == f.id))
        );
    }

    #[test]
    fn set_filter_before_load_is_harmless() {
        let s = reduce(UsersState::default(), set(FilterField::Username, "bret"));
        assert_eq!(s.status(), &RequestStatus::Idle);
        assert!(s.filtered_users().is_empty());
    }
}
