// ui.rs - Window, controls and board drawing
// The window is the clock: it calls step() when the generation delay has passed.

use std::time::{Duration, Instant};

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use life_engine::patterns::{self, Pattern};
use life_engine::{History, Life};
use log::{info, warn};
use rand::rngs::StdRng;

use crate::config::Config;
use crate::error::AppError;

const GRID_COLOR: Color32 = Color32::from_gray(60);
const LABEL_COLOR: Color32 = Color32::WHITE;

pub fn run(config: &Config, pattern: &'static Pattern, life: Life, rng: StdRng) -> Result<(), AppError> {
    let board_size = Vec2::new(
        life.board().cols() as f32 * config.cell_size,
        life.board().rows() as f32 * config.cell_size,
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Conway's Game of Life")
            .with_inner_size([board_size.x.max(640.0) + 32.0, board_size.y + 160.0]),
        ..Default::default()
    };

    let app = GameOfLife::new(config, pattern, life, rng);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct GameOfLife {
    life: Life,
    history: History,
    rng: StdRng,
    selected_pattern: usize,
    is_running: bool,
    last_update: Instant,
    update_interval: Duration,
    cell_size: f32,
    live_color: Color32,
    dead_color: Color32,
}

impl GameOfLife {
    pub fn new(config: &Config, pattern: &'static Pattern, life: Life, rng: StdRng) -> Self {
        let selected_pattern = patterns::PATTERNS
            .iter()
            .position(|p| p.name == pattern.name)
            .unwrap_or(0);
        let mut history = History::new();
        history.record(life.board());

        Self {
            life,
            history,
            rng,
            selected_pattern,
            is_running: true,
            last_update: Instant::now(),
            update_interval: config.delay(),
            cell_size: config.cell_size,
            live_color: Color32::WHITE,
            dead_color: Color32::BLACK,
        }
    }

    fn advance(&mut self) {
        self.life.step();
        if self.history.record(self.life.board()) {
            info!("generation {} repeats a recent board, pausing", self.life.generation());
            self.is_running = false;
        }
    }

    fn reseed(&mut self) {
        let pattern = &patterns::PATTERNS[self.selected_pattern];
        match self.life.reseed(pattern, &mut self.rng) {
            Ok(anchor) => {
                info!("reseeded {} at ({}, {})", pattern.name, anchor.row, anchor.col);
                self.history.clear();
                self.history.record(self.life.board());
            }
            Err(err) => warn!("cannot place {}: {err}", pattern.name),
        }
    }

    fn clear(&mut self) {
        self.is_running = false;
        self.life.reset();
        self.history.clear();
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        self.life.board_mut().toggle(row, col);
        self.history.clear();
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.is_running = !self.is_running;
                if self.is_running {
                    self.last_update = Instant::now();
                }
            }

            if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                self.advance();
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("🎲 Reseed").clicked() {
                self.reseed();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let rows = self.life.board().rows();
        let cols = self.life.board().cols();
        let size = self.cell_size;
        let total_size = Vec2::new(cols as f32 * size, rows as f32 * size);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, self.dead_color);

        for (row, col) in self.life.board().alive_cells() {
            let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
            painter.rect_filled(Rect::from_min_size(min, Vec2::splat(size)), 0.0, self.live_color);
        }

        // Grid lines
        let stroke = Stroke::new(1.0, GRID_COLOR);
        for row in 0..=rows {
            let y = origin.y + row as f32 * size;
            painter.line_segment([Pos2::new(origin.x, y), Pos2::new(origin.x + total_size.x, y)], stroke);
        }
        for col in 0..=cols {
            let x = origin.x + col as f32 * size;
            painter.line_segment([Pos2::new(x, origin.y), Pos2::new(x, origin.y + total_size.y)], stroke);
        }

        painter.text(
            origin + Vec2::splat(20.0),
            Align2::LEFT_TOP,
            format!("generation: {}", self.life.generation()),
            FontId::monospace(16.0),
            LABEL_COLOR,
        );

        // Clicking toggles a cell, only while paused
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pos - origin, size, rows, cols) {
                    self.toggle_cell(row, col);
                }
            }
        }
    }
}

// Board cell under a point relative to the board's top-left corner
fn cell_at(offset: Vec2, cell_size: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (row, col) = ((offset.y / cell_size) as usize, (offset.x / cell_size) as usize);
    (row < rows && col < cols).then_some((row, col))
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                self.draw_board(ui);
            });

            ui.separator();

            let live_cells = self.life.board().population();
            let total = self.life.board().rows() * self.life.board().cols();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval.saturating_sub(self.last_update.elapsed()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use life_engine::patterns::{BLOCK, GOSPER_GLIDER_GUN};
    use life_engine::Coord;
    use rand::SeedableRng;

    fn app_with_block(rows: usize, cols: usize) -> GameOfLife {
        let rows = rows.to_string();
        let cols = cols.to_string();
        let config = Config::try_parse_from(["conway", "--rows", rows.as_str(), "--cols", cols.as_str(), "--pattern", "block"]).unwrap();
        let pattern = config.validate().unwrap();
        let mut life = Life::new(config.rows, config.cols);
        life.seed_at(&BLOCK, Coord::new(0, 0)).unwrap();
        GameOfLife::new(&config, pattern, life, StdRng::seed_from_u64(1))
    }

    #[test]
    fn still_life_pauses_the_window() {
        let mut app = app_with_block(4, 4);
        assert!(app.is_running);

        app.advance();
        assert!(!app.is_running);
        assert_eq!(app.life.generation(), 1);
    }

    #[test]
    fn reseed_that_cannot_fit_keeps_the_board() {
        let mut app = app_with_block(2, 2);
        app.advance();
        let before = app.life.board().clone();
        app.selected_pattern = patterns::PATTERNS
            .iter()
            .position(|p| p.name == GOSPER_GLIDER_GUN.name)
            .unwrap();

        app.reseed();
        assert_eq!(app.life.board(), &before);
        assert_eq!(app.life.generation(), 1);
    }

    #[test]
    fn reseed_restarts_the_count() {
        let mut app = app_with_block(10, 10);
        app.advance();
        app.reseed();
        assert_eq!(app.life.generation(), 0);
        assert_eq!(app.life.board().population(), BLOCK.len());
    }

    #[test]
    fn clear_resets_generation_and_stops() {
        let mut app = app_with_block(6, 6);
        app.life.steps(3);
        app.clear();
        assert_eq!(app.life.generation(), 0);
        assert_eq!(app.life.board().population(), 0);
        assert!(!app.is_running);
    }

    #[test]
    fn toggling_a_cell_forgets_recent_boards() {
        let mut app = app_with_block(4, 4);
        app.toggle_cell(3, 3);
        app.toggle_cell(3, 3);

        // Same block as at startup, but the history no longer holds it
        app.advance();
        assert!(app.is_running);
        app.advance();
        assert!(!app.is_running);
    }

    #[test]
    fn cell_at_maps_points_to_cells() {
        assert_eq!(cell_at(Vec2::new(0.0, 0.0), 20.0, 3, 4), Some((0, 0)));
        assert_eq!(cell_at(Vec2::new(79.0, 59.0), 20.0, 3, 4), Some((2, 3)));
        assert_eq!(cell_at(Vec2::new(45.0, 21.0), 20.0, 3, 4), Some((1, 2)));
    }

    #[test]
    fn cell_at_rejects_points_off_the_board() {
        assert_eq!(cell_at(Vec2::new(80.0, 0.0), 20.0, 3, 4), None);
        assert_eq!(cell_at(Vec2::new(0.0, 60.0), 20.0, 3, 4), None);
        assert_eq!(cell_at(Vec2::new(-1.0, 5.0), 20.0, 3, 4), None);
    }
}
