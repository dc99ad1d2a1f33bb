/// The display seam: everything the panel does to the page goes through this
/// trait, so the flow can run against a real page binding or a test double.
pub trait PanelSurface {
    /// Replaces the result panel's content.
    fn apply_html(&mut self, html: &str);
    fn set_visible(&mut self, visible: bool);
    fn set_opacity(&mut self, opacity: f64);
    fn scroll_to_result(&mut self);
    fn scroll_to_top(&mut self);
    /// Clears every form field back to its default.
    fn clear_form(&mut self);
}

/// Recording double for tests.
#[derive(Debug)]
pub struct RecordingSurface {
    pub html: String,
    pub visible: bool,
    pub opacity: f64,
    pub form_clears: usize,
    pub result_scrolls: usize,
    pub top_scrolls: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            html: String::new(),
            visible: false,
            opacity: 1.0,
            form_clears: 0,
            result_scrolls: 0,
            top_scrolls: 0,
        }
    }
}

impl PanelSurface for RecordingSurface {
    fn apply_html(&mut self, html: &str) {
        self.html = html.to_owned();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn scroll_to_result(&mut self) {
        self.result_scrolls += 1;
    }

    fn scroll_to_top(&mut self) {
        self.top_scrolls += 1;
    }

    fn clear_form(&mut self) {
        self.form_clears += 1;
    }
}
