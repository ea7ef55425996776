//! Zentrales Plot-Panel: zeichnet den Frame der Blit-Pipeline.

use crate::app::{FitCommand, FitState};
use crate::core::PlotShape;

/// Rendert das Plot-Panel und gibt erzeugte Commands zurueck.
pub fn render_plot_panel(ctx: &egui::Context, state: &mut FitState) -> Vec<FitCommand> {
    let mut commands = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        let rect = response.rect;
        state.set_viewport(
            glam::Vec2::new(rect.min.x, rect.min.y),
            glam::Vec2::new(rect.width(), rect.height()),
        );

        commands.extend(super::input::plot_commands(&response));

        for shape in state.surface.draw() {
            paint_shape(&painter, &shape);
        }
    });

    commands
}

/// Zeichnet ein Plot-Primitiv mit dem egui-Painter.
fn paint_shape(painter: &egui::Painter, shape: &PlotShape) {
    match shape {
        PlotShape::Polyline {
            points,
            stroke_width,
            color,
            dashed,
        } => {
            if points.len() < 2 {
                return;
            }
            let positions: Vec<egui::Pos2> =
                points.iter().map(|p| egui::pos2(p.x, p.y)).collect();
            let stroke = egui::Stroke::new(*stroke_width, to_color32(*color));
            if *dashed {
                painter.extend(egui::Shape::dashed_line(&positions, stroke, 6.0, 4.0));
            } else {
                painter.add(egui::Shape::line(positions, stroke));
            }
        }
        PlotShape::Points {
            points,
            radius,
            color,
        } => {
            let fill = to_color32(*color);
            for p in points {
                painter.circle_filled(egui::pos2(p.x, p.y), *radius, fill);
            }
        }
    }
}

fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
