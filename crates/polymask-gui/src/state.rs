use polymask_core::geometry::ViewportState;

/// What is currently on screen.
#[derive(Default)]
pub struct ViewportDisplay {
    /// Last composed canvas, at physical-pixel resolution.
    pub texture: Option<egui::TextureHandle>,
    /// Layout the texture was composed for.
    pub layout: Option<ViewportState>,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages, newest last.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn last_log(&self) -> Option<&str> {
        self.log_messages.last().map(String::as_str)
    }
}
