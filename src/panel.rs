use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::client::PredictClient;
use crate::render;
use crate::surface::PanelSurface;
use crate::view::{PanelState, ViewState};

/// How long the panel stays faded out before it is hidden on reset.
pub const FADE_DELAY_MS: u64 = 300;

pub type StateDep = Arc<RwLock<PanelState>>;

/// Orchestrates the whole submit/reset flow for one result panel.
///
/// Requests run as spawned tasks, so a second submit while one is in flight
/// simply overlaps it; the token fence in `PanelState` guarantees the panel
/// only ever shows the outcome of the newest submission.
pub struct Panel<S: PanelSurface + Send + Sync + 'static> {
    client: Arc<PredictClient>,
    state: StateDep,
    surface: Arc<RwLock<S>>,
    fade_task: Option<JoinHandle<()>>,
}

impl<S: PanelSurface + Send + Sync + 'static> Panel<S> {
    pub fn new(client: PredictClient, surface: Arc<RwLock<S>>) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(RwLock::new(PanelState::new())),
            surface,
            fade_task: None,
        }
    }

    /// Submits the form fields and shows the loading view. The returned
    /// handle resolves once the response has been applied (or discarded as
    /// stale); callers that don't care may drop it.
    pub async fn submit(&mut self, fields: Vec<(String, String)>) -> JoinHandle<()> {
        self.cancel_fade();

        let token = self.state.write().await.begin_request();
        info!("submitting prediction request {}", token);
        {
            let state = self.state.read().await;
            let mut surface = self.surface.write().await;
            surface.set_visible(true);
            // A fade cancelled mid-delay leaves opacity at 0
            surface.set_opacity(1.0);
            surface.apply_html(&render::render(state.view()));
        }

        let client = self.client.clone();
        let state = self.state.clone();
        let surface = self.surface.clone();
        tokio::spawn(async move {
            let outcome = match client.predict(&fields).await {
                Ok(mut data) => match data.error.take() {
                    Some(message) => ViewState::ServerError(message),
                    None => ViewState::Success(data),
                },
                Err(e) => {
                    error!("prediction request {} failed: {:#}", token, e);
                    ViewState::ConnectionError
                }
            };

            let mut state = state.write().await;
            if !state.finish_request(token, outcome) {
                debug!("discarding stale response for request {}", token);
                return;
            }

            let mut surface = surface.write().await;
            surface.apply_html(&render::render(state.view()));
            surface.scroll_to_result();
        })
    }

    /// Clears the form and fades the panel out, hiding it after
    /// `FADE_DELAY_MS`. Harmless when nothing is shown.
    pub async fn reset(&mut self) {
        self.cancel_fade();
        self.state.write().await.reset();

        {
            let mut surface = self.surface.write().await;
            surface.clear_form();
            surface.set_opacity(0.0);
        }

        let surface = self.surface.clone();
        self.fade_task = Some(tokio::spawn(async move {
            sleep(Duration::from_millis(FADE_DELAY_MS)).await;
            let mut surface = surface.write().await;
            surface.set_visible(false);
            surface.set_opacity(1.0);
            surface.scroll_to_top();
        }));
    }

    fn cancel_fade(&mut self) {
        if let Some(task) = self.fade_task.take() {
            task.abort();
        }
    }
}
