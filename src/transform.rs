pub const ZOOM_MIN: u32 = 50;
pub const ZOOM_MAX: u32 = 200;
pub const ZOOM_STEP: u32 = 10;
pub const ZOOM_DEFAULT: u32 = 100;

const QUARTER_TURN: i32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Ephemeral view state of the preview pane.
///
/// Lives as long as the preview; picking another image keeps it.
pub struct TransformState {
    zoom: u32,
    /// Accumulated degrees. Never normalized, so it may be negative or
    /// exceed a full turn.
    rotation: i32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            zoom: ZOOM_DEFAULT,
            rotation: 0,
        }
    }
}

impl TransformState {
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Stores `value` clamped to the zoom range and snapped to its step.
    pub fn set_zoom(&mut self, value: u32) {
        self.zoom = snap_zoom(value);
    }

    pub fn rotate_left(&mut self) {
        self.rotation = step_rotation(self.rotation, -QUARTER_TURN);
    }

    pub fn rotate_right(&mut self) {
        self.rotation = step_rotation(self.rotation, QUARTER_TURN);
    }

    /// Rotation reduced by signed remainder; keeps the sign of the accumulator.
    pub fn visual_degrees(&self) -> i32 {
        self.rotation % 360
    }

    pub fn view(&self) -> ViewTransform {
        ViewTransform {
            scale: self.zoom as f32 / 100.0,
            degrees: self.rotation,
        }
    }
}

fn snap_zoom(value: u32) -> u32 {
    let clamped = value.clamp(ZOOM_MIN, ZOOM_MAX);
    let offset = clamped - ZOOM_MIN;
    let snapped = ZOOM_MIN + (offset + ZOOM_STEP / 2) / ZOOM_STEP * ZOOM_STEP;
    snapped.min(ZOOM_MAX)
}

fn step_rotation(rotation: i32, delta: i32) -> i32 {
    rotation
        .checked_add(delta)
        .unwrap_or(rotation % 360 + delta)
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Composed `scale` then `rotate` applied to the previewed image.
pub struct ViewTransform {
    pub scale: f32,
    pub degrees: i32,
}

impl ViewTransform {
    /// CSS-style description, e.g. `scale(1.5) rotate(-90deg)`.
    pub fn css(&self) -> String {
        format!("scale({}) rotate({}deg)", self.scale, self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_identity() {
        let t = TransformState::default();
        assert_eq!(t.zoom(), 100);
        assert_eq!(t.rotation(), 0);
        assert_eq!(t.view().css(), "scale(1) rotate(0deg)");
    }

    #[test]
    fn four_right_turns_accumulate_to_full_turn() {
        let mut t = TransformState::default();
        for _ in 0..4 {
            t.rotate_right();
        }
        assert_eq!(t.rotation(), 360);
        assert_eq!(t.visual_degrees(), 0);
    }

    #[test]
    fn left_turns_go_negative() {
        let mut t = TransformState::default();
        t.rotate_left();
        assert_eq!(t.rotation(), -90);
        t.rotate_left();
        t.rotate_left();
        assert_eq!(t.rotation(), -270);
        assert_eq!(t.visual_degrees(), -270);
        assert_eq!(t.view().css(), "scale(1) rotate(-270deg)");
    }

    #[test]
    fn left_then_right_restores_rotation() {
        let mut t = TransformState::default();
        for start_turns in -5..=5 {
            t.rotation = start_turns * 90;
            let before = t.rotation();
            t.rotate_left();
            t.rotate_right();
            assert_eq!(t.rotation(), before);
            t.rotate_right();
            t.rotate_left();
            assert_eq!(t.rotation(), before);
        }
    }

    #[test]
    fn rotation_never_overflows() {
        let mut t = TransformState {
            zoom: ZOOM_DEFAULT,
            rotation: i32::MAX - 10,
        };
        t.rotate_right();
        assert_eq!(t.rotation(), (i32::MAX - 10) % 360 + 90);

        t.rotation = i32::MIN + 10;
        t.rotate_left();
        assert_eq!(t.rotation(), (i32::MIN + 10) % 360 - 90);
    }

    #[test]
    fn zoom_stays_in_range_and_on_grid() {
        let mut t = TransformState::default();
        for raw in [0, 10, 49, 50, 54, 55, 120, 133, 199, 200, 250, u32::MAX] {
            t.set_zoom(raw);
            let z = t.zoom();
            assert!((ZOOM_MIN..=ZOOM_MAX).contains(&z), "{raw} -> {z}");
            assert_eq!(z % ZOOM_STEP, 0, "{raw} -> {z}");
        }
        t.set_zoom(150);
        assert_eq!(t.zoom(), 150);
        assert_eq!(t.view().scale, 1.5);
        t.set_zoom(10);
        assert_eq!(t.zoom(), 50);
        t.set_zoom(500);
        assert_eq!(t.zoom(), 200);
    }

    #[test]
    fn css_composes_scale_then_rotate() {
        let mut t = TransformState::default();
        t.set_zoom(150);
        t.rotate_right();
        assert_eq!(t.view().css(), "scale(1.5) rotate(90deg)");
    }
}
