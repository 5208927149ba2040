use eframe::egui::{self, Align2, FontId, Sense, Stroke, Vec2};

use crate::ops::time_ops::format_time;
use crate::renderer::ring::{ColorBand, RING_BACKGROUND, RingLayout};
use crate::types::countdown::{TimerSnapshot, TimerStatus};

/// Fixed sizing for the countdown ring.
#[derive(Debug, Clone, Copy)]
pub struct RingStyle {
    pub diameter: f32,
    pub stroke_width: f32,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            diameter: 260.0,
            stroke_width: 12.0,
        }
    }
}

/// Paints the countdown ring from a read-only engine snapshot. The widget
/// never mutates engine state.
pub struct RingWidget<'a> {
    snapshot: &'a TimerSnapshot,
    style: RingStyle,
}

impl<'a> RingWidget<'a> {
    pub fn new(snapshot: &'a TimerSnapshot, style: RingStyle) -> Self {
        Self { snapshot, style }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(self.style.diameter), Sense::hover());

        // RingLayout's radius spans the full side of its drawing area, so
        // hand it the centered half-size square to fill the allocation.
        let drawing_rect = egui::Rect::from_center_size(
            response.rect.center(),
            Vec2::splat(self.style.diameter / 2.0),
        );
        let layout = RingLayout::from_rect(drawing_rect, self.style.stroke_width);

        painter.circle_stroke(
            layout.center,
            layout.radius,
            Stroke::new(layout.stroke_width, RING_BACKGROUND),
        );

        let progress = self.snapshot.progress;
        if progress > 0.0 {
            let color = ColorBand::for_progress(progress).color();
            let points = layout.arc_points(progress);
            if points.len() >= 2 {
                let first = points[0];
                let last = points[points.len() - 1];
                painter.add(egui::Shape::line(
                    points,
                    Stroke::new(layout.stroke_width, color),
                ));
                // egui polylines are butt-capped; round the arc ends with dots
                let cap_radius = layout.stroke_width / 2.0;
                painter.circle_filled(first, cap_radius, color);
                painter.circle_filled(last, cap_radius, color);
            }
        }

        if self.snapshot.status == TimerStatus::Running {
            painter.text(
                layout.center,
                Align2::CENTER_CENTER,
                format_time(self.snapshot.remaining_seconds),
                FontId::proportional(36.0),
                egui::Color32::WHITE,
            );
        }

        response
    }
}
