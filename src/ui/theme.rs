//! Theme constants for the Go GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors with better contrast
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const CAPTURE_RING: Color32 = Color32::from_rgb(255, 50, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn territory_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 25, 170)
}

pub fn territory_white() -> Color32 {
    Color32::from_rgba_unmultiplied(245, 245, 250, 200)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const TERRITORY_MARK_RATIO: f32 = 0.18;

/// Star point (hoshi) coordinates for a board size.
///
/// Boards under 13 use the 3-3 points and larger ones the 4-4 points. Odd
/// sizes add tengen, and from 13 up the side points as well.
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    if size < 7 {
        return Vec::new();
    }

    let edge = if size < 13 { 2 } else { 3 };
    let far = (size - 1 - edge) as u8;
    let edge = edge as u8;
    let mid = (size / 2) as u8;
    let odd = size % 2 == 1;

    let mut points = vec![(edge, edge), (edge, far), (far, edge), (far, far)];
    if odd {
        points.push((mid, mid));
        if size >= 13 {
            points.extend([(edge, mid), (mid, edge), (mid, far), (far, mid)]);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_19() {
        let points = star_points(19);
        assert_eq!(points.len(), 9);
        assert!(points.contains(&(3, 3)));
        assert!(points.contains(&(9, 9)));
        assert!(points.contains(&(15, 15)));
    }

    #[test]
    fn test_star_points_9() {
        let points = star_points(9);
        assert_eq!(points.len(), 5);
        assert!(points.contains(&(2, 6)));
        assert!(points.contains(&(4, 4)));
    }

    #[test]
    fn test_star_points_tiny_board() {
        assert!(star_points(5).is_empty());
    }
}
