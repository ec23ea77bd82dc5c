//! Desktop preview for the sparkle strip
//!
//! Runs the simulation with a seeded RNG and paints every frame in a window.
//! Ticks are paced from the wall clock, scaled by the speed slider.

use std::convert::Infallible;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sparkle_strip::{OutputDriver, Rgb, Simulation, TICK_DURATION};

/// Number of LEDs in the simulated strip
const LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Upper bound of ticks run per repaint, so a stalled window does not spin
const MAX_TICKS_PER_FRAME: u32 = 32;

/// Output that keeps the last pushed frame for painting
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    type Error = Infallible;

    fn name(&self) -> &str {
        "preview"
    }

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
        Ok(())
    }
}

type PreviewSimulation = Simulation<PreviewOutput, StdRng, LED_COUNT>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 300.0])
            .with_title("Sparkle Strip Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "sparkle-strip-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

fn start_simulation(seed: u64) -> PreviewSimulation {
    match PreviewSimulation::start(PreviewOutput::default(), StdRng::seed_from_u64(seed)) {
        Ok(simulation) => simulation,
        // The preview output is always ready
        Err(err) => unreachable!("{err}"),
    }
}

struct PreviewApp {
    /// The simulation instance
    simulation: PreviewSimulation,
    /// Seed of the current run
    seed: u64,
    /// Ticks run since the last reseed
    ticks: u64,
    /// Sparkles that found no free slot
    dropped: u64,
    /// Simulated time not yet consumed by ticks, in seconds
    pending: f64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let seed = 1;
        Self {
            simulation: start_simulation(seed),
            seed,
            ticks: 0,
            dropped: 0,
            pending: 0.0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
        }
    }

    /// Restart the simulation with the current seed
    fn reseed(&mut self) {
        self.simulation = start_simulation(self.seed);
        self.ticks = 0;
        self.dropped = 0;
        self.pending = 0.0;
    }

    fn tick(&mut self) {
        let report = self.simulation.tick();
        if report.spawn.is_some_and(|spawn| spawn.slot.is_none()) {
            self.dropped += 1;
        }
        self.ticks += 1;
    }

    /// Run as many ticks as the elapsed wall time allows
    fn advance(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.playing {
            return;
        }

        #[allow(clippy::cast_precision_loss)]
        let tick_secs = TICK_DURATION.as_micros() as f64 / 1_000_000.0;
        self.pending += delta.as_secs_f64() * f64::from(self.time_scale);

        let mut budget = MAX_TICKS_PER_FRAME;
        while self.pending >= tick_secs && budget > 0 {
            self.pending -= tick_secs;
            budget -= 1;
            self.tick();
        }
        if budget == 0 {
            self.pending = 0.0;
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reseed").clicked() {
                            self.reseed();
                        }
                        if ui
                            .button(if self.playing {
                                "⏸ Pause"
                            } else {
                                "▶ Play"
                            })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if !self.playing && ui.button("⏭ Step").clicked() {
                            self.tick();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Seed:");
                        ui.add(egui::DragValue::new(&mut self.seed));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                                .logarithmic(true),
                        );
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <Stats>
                ui.vertical(|ui| {
                    ui.label(format!("Ticks: {}", self.ticks));
                    ui.label(format!(
                        "Active sparkles: {}",
                        self.simulation.pool().active_count()
                    ));
                    ui.label(format!("Dropped spawns: {}", self.dropped));
                    ui.label(format!("Next spawn in: {}", self.simulation.counter()));
                });
                // </Stats>
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.label("Size: ");
                    ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                });
            });

            ui.add_space(16.0);

            // === LED Display ===
            let frame = &self.simulation.output().frame;
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = LED_COUNT.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
