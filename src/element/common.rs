use egui::Color32;

// Common constants for all item kinds
pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Wrap an angle in degrees into `[0, 360)`
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid rounds tiny negative angles up to a full turn
    if wrapped >= FULL_TURN_DEGREES { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_stays_below_full_turn() {
        assert_eq!(normalize_degrees(-1e-6), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        for degrees in [-1e-7, -1e-5, -359.99999, 1e9, -1e9] {
            let wrapped = normalize_degrees(degrees);
            assert!((0.0..FULL_TURN_DEGREES).contains(&wrapped), "{degrees} wrapped to {wrapped}");
        }
    }
}
