//! Home view — the state machine behind the landing page.

use crate::error::FetchFailure;
use crate::greeting::GreetingResponse;

/// Text shown while the greeting is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Text shown when the greeting could not be fetched, whatever the cause.
pub const FETCH_ERROR_TEXT: &str = "Error fetching data";

/// Lifecycle of one mounted home view.
///
/// Starts in [`HomeState::Loading`] and settles exactly once into one of the
/// two terminal states. A fresh mount starts over from `Loading`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HomeState {
    #[default]
    Loading,
    Loaded(String),
    Failed(String),
}

impl HomeState {
    /// Terminal state for a settled fetch. Failure details are dropped here.
    #[must_use]
    pub fn settle(result: Result<GreetingResponse, FetchFailure>) -> Self {
        match result {
            Ok(greeting) => Self::Loaded(greeting.message),
            Err(_) => Self::Failed(FETCH_ERROR_TEXT.to_string()),
        }
    }

    /// Project the state onto the two fields the page renders.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        match self {
            Self::Loading => ViewState::default(),
            Self::Loaded(message) => ViewState {
                message: message.clone(),
                error: None,
            },
            Self::Failed(error) => ViewState {
                error: Some(error.clone()),
                ..ViewState::default()
            },
        }
    }
}

/// Presentational fields of the home page.
///
/// `message` keeps its loading placeholder when the fetch fails; the page
/// only renders it while `error` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub message: String,
    pub error: Option<String>,
}

impl ViewState {
    /// The message paragraph, if the page should render one.
    #[must_use]
    pub fn visible_message(&self) -> Option<&str> {
        self.error.is_none().then_some(self.message.as_str())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            message: LOADING_TEXT.to_string(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_loading() {
        let state = HomeState::default();
        assert_eq!(state, HomeState::Loading);

        let view = state.view_state();
        assert_eq!(view.visible_message(), Some("Loading..."));
        assert!(view.error.is_none());
    }

    #[test]
    fn should_show_message_without_error_when_loaded() {
        let state = HomeState::settle(Ok(GreetingResponse::new("hi")));
        assert_eq!(state, HomeState::Loaded("hi".to_string()));

        let view = state.view_state();
        assert_eq!(view.visible_message(), Some("hi"));
        assert!(view.error.is_none());
    }

    #[test]
    fn should_show_only_fixed_error_when_failed() {
        let failures = [
            FetchFailure::Network("connection refused".to_string()),
            FetchFailure::Status(500),
            FetchFailure::Decode("missing field `message`".to_string()),
        ];

        for failure in failures {
            let state = HomeState::settle(Err(failure));

            let view = state.view_state();
            assert_eq!(view.error.as_deref(), Some("Error fetching data"));
            assert_eq!(view.visible_message(), None);
        }
    }

    #[test]
    fn should_keep_loading_placeholder_structurally_when_failed() {
        let view = HomeState::Failed(FETCH_ERROR_TEXT.to_string()).view_state();
        assert_eq!(view.message, LOADING_TEXT);
    }
}
