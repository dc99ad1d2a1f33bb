use crate::prediction::PredictionResponse;

/// What the result panel is currently showing.
#[derive(Debug, Clone)]
pub enum ViewState {
    Hidden,
    Loading,
    Success(PredictionResponse),
    ServerError(String),
    ConnectionError,
}

pub type RequestToken = u64;

/// Panel state machine:
/// `Hidden → Loading → {Success | ServerError | ConnectionError} → (reset) → Hidden`.
///
/// Each submit gets a monotonically increasing token; a response carrying an
/// older token than the latest issued one is stale and must not touch the
/// panel, so the newest submission always wins regardless of arrival order.
#[derive(Debug)]
pub struct PanelState {
    current: ViewState,
    latest_token: RequestToken,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            current: ViewState::Hidden,
            latest_token: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.current
    }

    /// Starts a new request: transitions to `Loading` and returns the token
    /// that the eventual response must present.
    pub fn begin_request(&mut self) -> RequestToken {
        self.latest_token += 1;
        self.current = ViewState::Loading;
        self.latest_token
    }

    /// Applies a finished request's outcome. Returns false (leaving the state
    /// untouched) when a newer request has been issued since `token`.
    pub fn finish_request(&mut self, token: RequestToken, outcome: ViewState) -> bool {
        if token != self.latest_token {
            return false;
        }
        self.current = outcome;
        true
    }

    pub fn reset(&mut self) {
        self.current = ViewState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_request_enters_loading() {
        let mut state = PanelState::new();
        let token = state.begin_request();

        assert_eq!(token, 1);
        assert!(matches!(state.view(), ViewState::Loading));
    }

    #[test]
    fn finish_applies_latest_outcome() {
        let mut state = PanelState::new();
        let token = state.begin_request();

        assert!(state.finish_request(token, ViewState::ConnectionError));
        assert!(matches!(state.view(), ViewState::ConnectionError));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = PanelState::new();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(!state.finish_request(first, ViewState::ConnectionError));
        assert!(matches!(state.view(), ViewState::Loading));

        assert!(state.finish_request(second, ViewState::ServerError("late".to_owned())));
        assert!(matches!(state.view(), ViewState::ServerError(_)));

        // The stale token stays dead even after the newer one landed
        assert!(!state.finish_request(first, ViewState::ConnectionError));
        assert!(matches!(state.view(), ViewState::ServerError(_)));
    }

    #[test]
    fn reset_returns_to_hidden() {
        let mut state = PanelState::new();
        let token = state.begin_request();
        state.finish_request(token, ViewState::ConnectionError);

        state.reset();
        assert!(matches!(state.view(), ViewState::Hidden));

        // Idempotent
        state.reset();
        assert!(matches!(state.view(), ViewState::Hidden));
    }
}
