use polymask_core::consts::LABEL_COLOR;
use polymask_core::geometry::ViewportState;
use polymask_core::render::vertex_labels;
use polymask_core::session::InputEvent;

use crate::app::PolymaskApp;

/// Smallest label text, in points, so labels stay readable on tiny scales.
const MIN_LABEL_POINTS: f32 = 7.0;

pub fn show(ctx: &egui::Context, app: &mut PolymaskApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let ppp = ctx.pixels_per_point();
            let response = ui.allocate_rect(rect, egui::Sense::click());

            let layout = app.session.fit_viewport(
                (rect.width() * ppp).round() as u32,
                (rect.height() * ppp).round() as u32,
            );

            let events = ui.input(|i| input_events(&i.events, rect, ppp));
            app.dispatch(ctx, &events, &layout);
            app.refresh_canvas(ctx, &layout);

            if let Some(ref texture) = app.viewport.texture {
                draw_canvas(ui, texture.id(), texture.size(), rect.min, ppp);
            }
            draw_labels(ui, app, &layout, rect.min, ppp);
            update_cursor(ctx, &response, &layout, rect.min, ppp);
        });
}

/// Pointer presses inside the panel, Escape and typed characters, in the
/// order they arrived. Pointer positions are in physical pixels relative to
/// the panel's top-left corner.
fn input_events(events: &[egui::Event], rect: egui::Rect, ppp: f32) -> Vec<InputEvent> {
    events
        .iter()
        .flat_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if rect.contains(*pos) => match button {
                egui::PointerButton::Primary => {
                    let (x, y) = to_pixels(*pos, rect.min, ppp);
                    vec![InputEvent::PrimaryPress { x, y }]
                }
                egui::PointerButton::Secondary => vec![InputEvent::SecondaryPress],
                _ => Vec::new(),
            },
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => vec![InputEvent::Escape],
            egui::Event::Text(text) => text.chars().map(InputEvent::Key).collect(),
            _ => Vec::new(),
        })
        .collect()
}

fn to_pixels(pos: egui::Pos2, origin: egui::Pos2, ppp: f32) -> (f64, f64) {
    (
        ((pos.x - origin.x) * ppp) as f64,
        ((pos.y - origin.y) * ppp) as f64,
    )
}

fn to_points(x: f64, y: f64, origin: egui::Pos2, ppp: f32) -> egui::Pos2 {
    origin + egui::vec2(x as f32 / ppp, y as f32 / ppp)
}

/// Paint the canvas 1:1 in physical pixels from the panel origin.
fn draw_canvas(
    ui: &egui::Ui,
    texture_id: egui::TextureId,
    size: [usize; 2],
    origin: egui::Pos2,
    ppp: f32,
) {
    let canvas_rect = egui::Rect::from_min_size(
        origin,
        egui::vec2(size[0] as f32 / ppp, size[1] as f32 / ppp),
    );
    ui.painter().image(
        texture_id,
        canvas_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_labels(
    ui: &egui::Ui,
    app: &PolymaskApp,
    layout: &ViewportState,
    origin: egui::Pos2,
    ppp: f32,
) {
    let [r, g, b] = LABEL_COLOR;
    let color = egui::Color32::from_rgb(r, g, b);

    for label in vertex_labels(app.session.vertices().as_slice(), layout) {
        ui.painter().text(
            to_points(label.x, label.y, origin, ppp),
            egui::Align2::LEFT_BOTTOM,
            label.text,
            egui::FontId::proportional((label.size as f32 / ppp).max(MIN_LABEL_POINTS)),
            color,
        );
    }
}

/// Crosshair over the image, default cursor over the border.
fn update_cursor(
    ctx: &egui::Context,
    response: &egui::Response,
    layout: &ViewportState,
    origin: egui::Pos2,
    ppp: f32,
) {
    if let Some(hover) = response.hover_pos() {
        let (x, y) = to_pixels(hover, origin, ppp);
        if layout.to_source(x, y).is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0))
    }

    fn press(x: f32, y: f32, button: egui::PointerButton) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_input_events_keep_arrival_order() {
        let events = [
            egui::Event::Text("s".into()),
            press(30.0, 40.0, egui::PointerButton::Primary),
            press(30.0, 40.0, egui::PointerButton::Secondary),
            egui::Event::Text("S".into()),
        ];
        assert_eq!(
            input_events(&events, panel(), 1.0),
            vec![
                InputEvent::Key('s'),
                InputEvent::PrimaryPress { x: 20.0, y: 20.0 },
                InputEvent::SecondaryPress,
                InputEvent::Key('S'),
            ]
        );
    }

    #[test]
    fn test_input_events_use_physical_pixels() {
        let events = [press(30.0, 40.0, egui::PointerButton::Primary)];
        assert_eq!(
            input_events(&events, panel(), 2.0),
            vec![InputEvent::PrimaryPress { x: 40.0, y: 40.0 }]
        );
    }

    #[test]
    fn test_input_events_skip_presses_outside_panel_and_releases() {
        let release = egui::Event::PointerButton {
            pos: egui::pos2(30.0, 40.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        let events = [
            press(5.0, 5.0, egui::PointerButton::Primary),
            release,
            press(30.0, 40.0, egui::PointerButton::Middle),
        ];
        assert!(input_events(&events, panel(), 1.0).is_empty());
    }
}
