use std::env::args;
use std::sync::Arc;

use tokio::sync::RwLock;

use risk_panel::client::PredictClient;
use risk_panel::env_config::EnvConfig;
use risk_panel::panel::Panel;
use risk_panel::surface::PanelSurface;

/// Prints the rendered panel instead of touching a page.
struct StdoutSurface;

impl PanelSurface for StdoutSurface {
    fn apply_html(&mut self, html: &str) {
        println!("{}", html);
    }

    fn set_visible(&mut self, _visible: bool) {}

    fn set_opacity(&mut self, _opacity: f64) {}

    fn scroll_to_result(&mut self) {}

    fn scroll_to_top(&mut self) {}

    fn clear_form(&mut self) {}
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = EnvConfig::new();
    let client = PredictClient::new(&config).unwrap();

    // name=value args become the submitted form fields
    let fields: Vec<(String, String)> = args()
        .skip(1)
        .filter_map(|arg| arg.split_once('=').map(|(k, v)| (k.to_owned(), v.to_owned())))
        .collect();

    let surface = Arc::new(RwLock::new(StdoutSurface));
    let mut panel = Panel::new(client, surface);
    panel.submit(fields).await.await.unwrap();
}
