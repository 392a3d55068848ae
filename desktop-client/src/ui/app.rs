use std::time::Duration;

use common::defaults::MAX_NAME_LENGTH;
use common::games::snake::{SnakeSession, SnakeSessionSettings, SnakeSnapshot, TickHandle, TickScheduler};
use common::leaderboard::{LeaderboardStore, ScoreSubmission};
use common::log;
use common::storage::FileKeyValueStore;
use eframe::egui;

use crate::input::pressed_directions;
use super::board::render_board;
use super::colors::{GAME_OVER, MUTED_TEXT};
use super::leaderboard_panel::render_leaderboard;

pub struct SnakeApp {
    session: SnakeSession,
    ticker: TickHandle,
    runtime: tokio::runtime::Handle,
    tick_interval: Duration,
    leaderboard: LeaderboardStore<FileKeyValueStore>,
    submission: ScoreSubmission,
    player_name: String,
    focus_requested: bool,
}

impl SnakeApp {
    pub fn new(
        settings: &SnakeSessionSettings,
        leaderboard: LeaderboardStore<FileKeyValueStore>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let session = SnakeSession::create(settings);
        log!("New game with seed {}", session.seed());
        let ticker = TickScheduler::spawn_on(&runtime, session.clone(), settings.tick_interval);

        Self {
            session,
            ticker,
            runtime,
            tick_interval: settings.tick_interval,
            leaderboard,
            submission: ScoreSubmission::new(),
            player_name: String::new(),
            focus_requested: false,
        }
    }

    fn restart(&mut self) {
        self.ticker.stop();
        self.session.reset();
        self.submission.reset();
        self.player_name.clear();
        self.focus_requested = false;
        self.ticker = TickScheduler::spawn_on(&self.runtime, self.session.clone(), self.tick_interval);
        log!("Game restarted");
    }

    fn handle_input(&self, ctx: &egui::Context) {
        for direction in pressed_directions(ctx) {
            self.session.set_direction(direction);
        }
    }

    fn render_game_over(&mut self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
        ui.label(egui::RichText::new("Game Over!").color(GAME_OVER).size(24.0));
        ui.add_space(8.0);

        if self.submission.is_awaiting_name() {
            self.render_name_prompt(ui, snapshot.score);
        } else if ui.button("Restart").clicked() {
            self.restart();
        }
    }

    fn render_name_prompt(&mut self, ui: &mut egui::Ui, score: u32) {
        let label = if self.leaderboard.qualifies(score) {
            "New high score! Your name:"
        } else {
            "Your name:"
        };
        ui.label(label);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.player_name)
                .hint_text("Anonymous")
                .char_limit(MAX_NAME_LENGTH)
                .desired_width(180.0),
        );

        if !self.focus_requested {
            response.request_focus();
            self.focus_requested = true;
        }

        let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let button_clicked = ui.button("Save score").clicked();

        if enter_pressed || button_clicked {
            self.submission.submit(&self.player_name, &mut self.leaderboard);
            self.player_name.clear();
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let snapshot = self.session.snapshot();
        if snapshot.is_over() {
            self.submission.on_game_over(snapshot.score);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Snake");
                ui.label(format!("Score: {}", snapshot.score));
                ui.add_space(10.0);

                render_board(ui, &snapshot);
                ui.add_space(10.0);

                if snapshot.is_over() {
                    self.render_game_over(ui, &snapshot);
                    ui.add_space(10.0);
                }

                render_leaderboard(ui, self.leaderboard.entries());

                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Controls: arrow keys or WASD")
                        .color(MUTED_TEXT)
                        .small(),
                );
            });
        });

        if !snapshot.is_over() {
            ctx.request_repaint_after(self.tick_interval / 2);
        }
    }
}

impl Drop for SnakeApp {
    fn drop(&mut self) {
        self.ticker.stop();
    }
}
