//! Mapping from terminal events to normalizer input.

use crate::gesture::{TouchPoint, WheelDelta};
use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Delta reported for one terminal scroll step.
///
/// Terminals only encode scroll direction, so each step stands in for a small
/// trackpad delta: above the per-event gesture minimum and below the mouse
/// wheel cutoff. Two steps inside one settle window make a gesture.
pub const WHEEL_STEP_DELTA: f32 = 60.0;

/// Map arrow keys to directions.
pub fn classify_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Pixel size of one terminal cell, used to scale pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_w_px: f32,
    pub cell_h_px: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_w_px: 8.0,
            cell_h_px: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(cell_w_px: f32, cell_h_px: f32) -> Self {
        Self {
            cell_w_px,
            cell_h_px,
        }
    }

    /// Pixel position of the center of a cell.
    pub fn to_point(&self, column: u16, row: u16) -> TouchPoint {
        TouchPoint::new(
            (column as f32 + 0.5) * self.cell_w_px,
            (row as f32 + 0.5) * self.cell_h_px,
        )
    }

    /// Cell containing a pixel position.
    pub fn to_cell(&self, point: TouchPoint) -> (u16, u16) {
        let col = (point.x / self.cell_w_px).max(0.0) as u16;
        let row = (point.y / self.cell_h_px).max(0.0) as u16;
        (col, row)
    }
}

/// Pointer input in normalizer terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    TouchStart(TouchPoint),
    TouchEnd(TouchPoint),
    Wheel { delta: WheelDelta, column: u16, row: u16 },
    Ignored,
}

/// Map a terminal mouse event.
///
/// A left-button press and release play the part of a touch start and end.
pub fn map_mouse_event(event: &MouseEvent, metrics: CellMetrics) -> PointerInput {
    let (column, row) = (event.column, event.row);
    let wheel = |dx: f32, dy: f32| PointerInput::Wheel {
        delta: WheelDelta::new(dx, dy),
        column,
        row,
    };

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            PointerInput::TouchStart(metrics.to_point(column, row))
        }
        MouseEventKind::Up(MouseButton::Left) => PointerInput::TouchEnd(metrics.to_point(column, row)),
        MouseEventKind::ScrollDown => wheel(0.0, WHEEL_STEP_DELTA),
        MouseEventKind::ScrollUp => wheel(0.0, -WHEEL_STEP_DELTA),
        MouseEventKind::ScrollRight => wheel(WHEEL_STEP_DELTA, 0.0),
        MouseEventKind::ScrollLeft => wheel(-WHEEL_STEP_DELTA, 0.0),
        _ => PointerInput::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(classify_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(classify_key(KeyCode::Right), Some(Direction::Right));
        assert_eq!(classify_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(classify_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(classify_key(KeyCode::Char('h')), None);
        assert_eq!(classify_key(KeyCode::PageDown), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_left_button_maps_to_touch() {
        let metrics = CellMetrics::default();
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), metrics),
            PointerInput::TouchStart(TouchPoint::new(84.0, 40.0))
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), metrics),
            PointerInput::TouchEnd(TouchPoint::new(4.0, 8.0))
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), metrics),
            PointerInput::Ignored
        );
    }

    #[test]
    fn test_scroll_steps_map_to_wheel_deltas() {
        let metrics = CellMetrics::default();
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::ScrollUp, 3, 4), metrics),
            PointerInput::Wheel {
                delta: WheelDelta::new(0.0, -WHEEL_STEP_DELTA),
                column: 3,
                row: 4
            }
        );
        assert_eq!(
            map_mouse_event(&mouse(MouseEventKind::ScrollRight, 0, 0), metrics),
            PointerInput::Wheel {
                delta: WheelDelta::new(WHEEL_STEP_DELTA, 0.0),
                column: 0,
                row: 0
            }
        );
    }

    #[test]
    fn test_cell_round_trip() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.to_cell(metrics.to_point(17, 9)), (17, 9));
    }
}
