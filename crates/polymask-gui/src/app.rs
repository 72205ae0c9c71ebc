use polymask_core::config::SessionConfig;
use polymask_core::error::PolymaskError;
use polymask_core::geometry::ViewportState;
use polymask_core::render::Renderer;
use polymask_core::session::{InputEvent, Session, SessionAction};
use tracing::{error, info, warn};

use crate::convert::rgb_to_color_image;
use crate::panels;
use crate::state::{UIState, ViewportDisplay};

pub struct PolymaskApp {
    pub session: Session,
    pub config: SessionConfig,
    pub renderer: Renderer,
    pub viewport: ViewportDisplay,
    pub ui_state: UIState,
}

impl PolymaskApp {
    pub fn new(session: Session, config: SessionConfig) -> Self {
        let (w, h) = session.dimensions();
        let mut ui_state = UIState::default();
        ui_state.add_log(format!("Opened {} ({w}x{h})", config.input.display()));

        Self {
            session,
            config,
            renderer: Renderer::new(),
            viewport: ViewportDisplay::default(),
            ui_state,
        }
    }

    /// Feed events to the session in arrival order, stopping once one of
    /// them ends the session.
    pub fn dispatch(&mut self, ctx: &egui::Context, events: &[InputEvent], layout: &ViewportState) {
        for &event in events {
            match self.session.handle(event, layout) {
                SessionAction::Ignored | SessionAction::Redraw => {}
                SessionAction::Save => {
                    if self.save() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        return;
                    }
                }
                SessionAction::Exit => {
                    info!("Exit without saving");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    return;
                }
            }
        }
    }

    /// Export the mask. Returns true if it was written.
    ///
    /// A rejected or failed export leaves the session open for more editing.
    fn save(&mut self) -> bool {
        match self.session.export(&self.config.output) {
            Ok(written) => {
                self.ui_state.add_log(format!("Saved: {}", written.path.display()));
                true
            }
            Err(e @ PolymaskError::TooFewVertices { .. }) => {
                warn!("{e}");
                self.ui_state.add_log(e.to_string());
                false
            }
            Err(e) => {
                error!(path = %self.config.output.display(), "Failed to save mask: {e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
                false
            }
        }
    }

    /// Recompose the canvas if the vertices or the layout changed.
    pub fn refresh_canvas(&mut self, ctx: &egui::Context, layout: &ViewportState) {
        let canvas = self
            .renderer
            .render(self.session.source(), self.session.vertices(), layout);

        if let Some(canvas) = canvas {
            let image = rgb_to_color_image(&canvas);
            let texture = ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST);
            self.viewport.texture = Some(texture);
            self.viewport.layout = Some(*layout);
        }
    }
}

impl eframe::App for PolymaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn app_writing_to(output: std::path::PathBuf) -> PolymaskApp {
        let source = RgbImage::from_pixel(100, 100, Rgb([128, 128, 128]));
        let config = SessionConfig {
            output,
            ..SessionConfig::default()
        };
        PolymaskApp::new(Session::new(source), config)
    }

    #[test]
    fn test_dispatch_save_before_click_in_same_frame() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mask.png");
        let mut app = app_writing_to(output.clone());
        let ctx = egui::Context::default();
        let layout = ViewportState::fit(100, 100, 100, 100);

        app.dispatch(
            &ctx,
            &[
                InputEvent::PrimaryPress { x: 10.0, y: 10.0 },
                InputEvent::PrimaryPress { x: 90.0, y: 10.0 },
            ],
            &layout,
        );

        // Save arrives before the third click: rejected, then the click lands.
        app.dispatch(
            &ctx,
            &[
                InputEvent::Key('s'),
                InputEvent::PrimaryPress { x: 90.0, y: 90.0 },
            ],
            &layout,
        );
        assert_eq!(app.session.vertices().count(), 3);
        assert!(!output.exists());
        assert!(app
            .ui_state
            .last_log()
            .is_some_and(|msg| msg.contains("At least 3 points")));

        app.dispatch(&ctx, &[InputEvent::Key('S')], &layout);
        assert!(output.exists());
    }

    #[test]
    fn test_dispatch_stops_after_exit() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mask.png");
        let mut app = app_writing_to(output.clone());
        let ctx = egui::Context::default();
        let layout = ViewportState::fit(100, 100, 100, 100);

        app.dispatch(
            &ctx,
            &[
                InputEvent::Escape,
                InputEvent::PrimaryPress { x: 10.0, y: 10.0 },
            ],
            &layout,
        );
        assert!(app.session.vertices().is_empty());
        assert!(!output.exists());
    }
}
