use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

pub const BAND_GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub const BAND_YELLOW: Color32 = Color32::from_rgb(255, 193, 7);
pub const BAND_RED: Color32 = Color32::from_rgb(244, 67, 54);

/// Low-opacity neutral ring drawn behind the progress arc.
pub const RING_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(38, 38, 38, 77);

/// Urgency color of the arc, selected by thresholding progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBand {
    Green,
    Yellow,
    Red,
}

impl ColorBand {
    /// Total over all floats: boundary values close the lower band, and
    /// out-of-range inputs fall into the nearest band.
    pub fn for_progress(progress: f32) -> Self {
        if progress <= 0.6 {
            ColorBand::Green
        } else if progress <= 0.9 {
            ColorBand::Yellow
        } else {
            ColorBand::Red
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            ColorBand::Green => BAND_GREEN,
            ColorBand::Yellow => BAND_YELLOW,
            ColorBand::Red => BAND_RED,
        }
    }
}

/// Geometry of the countdown ring for one square drawing area, computed
/// separately from painting so it can be tested without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: Pos2,
    pub radius: f32,
    pub stroke_width: f32,
}

impl RingLayout {
    /// Lays the ring out over a square drawing area of side `S`: center at
    /// (S/2, S/2), radius `S - stroke_width/2` clamped to >= 0. The radius
    /// spans the whole side, so callers size the drawing area accordingly.
    pub fn from_rect(rect: Rect, stroke_width: f32) -> Self {
        let side = rect.width().min(rect.height());
        Self {
            center: Pos2::new(rect.min.x + side / 2.0, rect.min.y + side / 2.0),
            radius: (side - stroke_width / 2.0).max(0.0),
            stroke_width,
        }
    }

    /// Point on the ring at `angle` radians (0 = right, y grows downward,
    /// so increasing angles sweep clockwise on screen).
    pub fn point_at(&self, angle: f32) -> Pos2 {
        Pos2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Polyline for the progress arc: starts at the top (-pi/2) and sweeps
    /// clockwise `tau * progress` radians. Segment count scales with the
    /// sweep; always at least two points.
    pub fn arc_points(&self, progress: f32) -> Vec<Pos2> {
        let sweep = TAU * progress.clamp(0.0, 1.0);
        let segments = ((sweep / TAU * 144.0).ceil() as usize).max(1);
        (0..=segments)
            .map(|i| self.point_at(-FRAC_PI_2 + sweep * i as f32 / segments as f32))
            .collect()
    }
}

/// The single float driving the ring: a frame is only worth repainting
/// when it differs exactly from the last painted value.
pub fn should_repaint(last_painted: f32, current: f32) -> bool {
    last_painted != current
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn assert_pos_eq(a: Pos2, b: Pos2) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ColorBand::for_progress(0.0), ColorBand::Green);
        assert_eq!(ColorBand::for_progress(0.6), ColorBand::Green);
        assert_eq!(ColorBand::for_progress(0.61), ColorBand::Yellow);
        assert_eq!(ColorBand::for_progress(0.9), ColorBand::Yellow);
        assert_eq!(ColorBand::for_progress(0.91), ColorBand::Red);
        assert_eq!(ColorBand::for_progress(1.0), ColorBand::Red);
    }

    #[test]
    fn test_band_out_of_range_inputs() {
        assert_eq!(ColorBand::for_progress(-0.5), ColorBand::Green);
        assert_eq!(ColorBand::for_progress(1.5), ColorBand::Red);
    }

    #[test]
    fn test_layout_radius_formula() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(200.0, 200.0));
        let layout = RingLayout::from_rect(rect, 10.0);
        assert_pos_eq(layout.center, pos2(100.0, 100.0));
        assert_eq!(layout.radius, 195.0);
    }

    #[test]
    fn test_layout_uses_shorter_side_and_clamps() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(300.0, 120.0));
        let layout = RingLayout::from_rect(rect, 8.0);
        assert_eq!(layout.radius, 116.0);

        let tiny = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(4.0, 4.0));
        let layout = RingLayout::from_rect(tiny, 10.0);
        assert_eq!(layout.radius, 0.0);
    }

    #[test]
    fn test_arc_starts_at_top() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(100.0, 100.0));
        let layout = RingLayout::from_rect(rect, 10.0);
        let points = layout.arc_points(0.25);
        assert_pos_eq(points[0], pos2(50.0, 50.0 - layout.radius));
    }

    #[test]
    fn test_arc_sweep_endpoints() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(100.0, 100.0));
        let layout = RingLayout::from_rect(rect, 10.0);

        // Quarter sweep lands at the right of the ring
        let quarter = layout.arc_points(0.25);
        assert_pos_eq(*quarter.last().unwrap(), pos2(50.0 + layout.radius, 50.0));

        // Half sweep lands at the bottom
        let half = layout.arc_points(0.5);
        assert_pos_eq(*half.last().unwrap(), pos2(50.0, 50.0 + layout.radius));

        // Full sweep closes back at the top
        let full = layout.arc_points(1.0);
        assert_pos_eq(*full.last().unwrap(), full[0]);
    }

    #[test]
    fn test_arc_segment_count_scales_with_sweep() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(100.0, 100.0));
        let layout = RingLayout::from_rect(rect, 10.0);
        assert_eq!(layout.arc_points(0.0).len(), 2);
        assert!(layout.arc_points(1.0).len() > layout.arc_points(0.25).len());
    }

    #[test]
    fn test_should_repaint_on_exact_change_only() {
        assert!(!should_repaint(0.5, 0.5));
        assert!(should_repaint(0.5, 0.500001));
        assert!(should_repaint(0.0, 1.0));
    }
}
