use common::leaderboard::LeaderboardEntry;
use eframe::egui;

use super::colors::MUTED_TEXT;

pub fn render_leaderboard(ui: &mut egui::Ui, entries: &[LeaderboardEntry]) {
    ui.heading("Leaderboard");
    ui.add_space(5.0);

    if entries.is_empty() {
        ui.label(egui::RichText::new("No scores yet").color(MUTED_TEXT));
        return;
    }

    egui::Grid::new("leaderboard_grid")
        .num_columns(3)
        .striped(true)
        .min_col_width(40.0)
        .show(ui, |ui| {
            ui.strong("#");
            ui.strong("Name");
            ui.strong("Score");
            ui.end_row();

            for (idx, entry) in entries.iter().enumerate() {
                ui.label((idx + 1).to_string());
                ui.label(entry.name.as_str());
                ui.label(entry.score.to_string());
                ui.end_row();
            }
        });
}
