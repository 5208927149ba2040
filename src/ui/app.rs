use std::time::{Duration, Instant};

use eframe::egui;
use tracing::debug;

use crate::renderer::ring::should_repaint;
use crate::types::countdown::{CountdownEngine, TimerConfig, TimerStatus};
use crate::ui::ring_widget::{RingStyle, RingWidget};

pub struct AppState {
    pub engine: CountdownEngine,
    pub minutes_input: String,
    pub seconds_input: String,
    pub ring_style: RingStyle,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: CountdownEngine::new(),
            minutes_input: String::new(),
            seconds_input: String::new(),
            ring_style: RingStyle::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CountdownApp {
    pub state: AppState,
}

impl CountdownApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Drive the countdown clock while running ---
        if self.state.engine.snapshot().status == TimerStatus::Running {
            let before = self.state.engine.snapshot().progress;
            self.state.engine.tick(Instant::now());
            if should_repaint(before, self.state.engine.snapshot().progress) {
                ctx.request_repaint(); // keep ticking
            } else {
                // Schedule next repaint to keep the arc smooth
                ctx.request_repaint_after(Duration::from_millis(16));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                let snapshot = self.state.engine.snapshot();
                RingWidget::new(&snapshot, self.state.ring_style).show(ui);
                ui.add_space(16.0);

                // Input fields are only shown while idle; while running the
                // ring carries the MM:SS readout instead.
                if snapshot.status == TimerStatus::Idle {
                    ui.horizontal(|ui| {
                        ui.label("Minutes");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.state.minutes_input)
                                .desired_width(48.0)
                                .hint_text("MM"),
                        );
                        ui.label("Seconds");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.state.seconds_input)
                                .desired_width(48.0)
                                .hint_text("SS"),
                        );
                    });
                    ui.add_space(8.0);
                }

                let label = if snapshot.status == TimerStatus::Running {
                    "Cancel"
                } else {
                    "Start"
                };
                if ui.button(label).clicked() {
                    match snapshot.status {
                        TimerStatus::Running => self.state.engine.cancel(),
                        TimerStatus::Idle => {
                            let config = TimerConfig::from_input(
                                &self.state.minutes_input,
                                &self.state.seconds_input,
                            );
                            if let Err(err) = self.state.engine.start(&config, Instant::now()) {
                                // Zero duration: stay idle, no visible feedback
                                debug!("start rejected: {err}");
                            }
                        }
                    }
                }
            });
        });
    }
}
