use common::games::snake::CellKind;
use eframe::egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const GAME_OVER: Color32 = Color32::from_rgb(0xe5, 0x39, 0x35);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

pub fn cell_color(kind: CellKind) -> Color32 {
    match kind {
        CellKind::Head => Color32::from_rgb(0x00, 0xff, 0x00),
        CellKind::Body => Color32::from_rgb(0x66, 0xff, 0x66),
        CellKind::Food => Color32::from_rgb(0xff, 0x00, 0x00),
        CellKind::Empty => Color32::from_rgb(0x22, 0x22, 0x22),
    }
}
