use common::games::snake::{Point, SnakeSnapshot};
use eframe::egui;

use super::colors::{cell_color, BOARD_BACKGROUND, BOARD_BORDER};

const CELL_SIZE: f32 = 20.0;
const CELL_GAP: f32 = 1.0;
const BORDER_WIDTH: f32 = 3.0;

pub fn render_board(ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
    let side = snapshot.board_size as f32 * CELL_SIZE + 2.0 * BORDER_WIDTH;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, BOARD_BORDER);
    let inner = rect.shrink(BORDER_WIDTH);
    painter.rect_filled(inner, 0.0, BOARD_BACKGROUND);

    for y in 0..snapshot.board_size {
        for x in 0..snapshot.board_size {
            let min = inner.min + egui::vec2(x as f32 * CELL_SIZE, y as f32 * CELL_SIZE);
            let cell = egui::Rect::from_min_size(min, egui::vec2(CELL_SIZE, CELL_SIZE));
            let color = cell_color(snapshot.cell_at(Point::new(x, y)));
            painter.rect_filled(cell.shrink(CELL_GAP), 0.0, color);
        }
    }
}
