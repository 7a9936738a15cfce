use crate::model::{SwipeDirection, TouchPoint};

/// Minimum displacement along the dominant axis, in UI-surface units.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Classifies the net displacement between two touch points.
///
/// The axis with the larger absolute displacement wins; ties go to the
/// vertical axis. The winning displacement must strictly exceed
/// [`SWIPE_THRESHOLD`], otherwise there is no gesture.
pub fn detect_swipe(start: TouchPoint, end: TouchPoint) -> Option<SwipeDirection> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > dy.abs() {
        if dx.abs() > SWIPE_THRESHOLD {
            return Some(if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            });
        }
    } else if dy.abs() > SWIPE_THRESHOLD {
        // Screen y grows downwards.
        return Some(if dy > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(x0: f64, y0: f64, x1: f64, y1: f64) -> Option<SwipeDirection> {
        detect_swipe(TouchPoint::new(x0, y0), TouchPoint::new(x1, y1))
    }

    #[test]
    fn cardinal_swipes() {
        assert_eq!(swipe(0.0, 0.0, 100.0, 0.0), Some(SwipeDirection::Right));
        assert_eq!(swipe(0.0, 0.0, -100.0, 0.0), Some(SwipeDirection::Left));
        assert_eq!(swipe(0.0, 0.0, 0.0, 100.0), Some(SwipeDirection::Down));
        assert_eq!(swipe(0.0, 0.0, 0.0, -100.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn short_moves_are_not_gestures() {
        assert_eq!(swipe(0.0, 0.0, 10.0, 10.0), None);
        assert_eq!(swipe(0.0, 0.0, -49.9, 3.0), None);
        assert_eq!(swipe(200.0, 200.0, 220.0, 170.0), None);
    }

    #[test]
    fn zero_displacement_is_not_a_gesture() {
        assert_eq!(swipe(0.0, 0.0, 0.0, 0.0), None);
        assert_eq!(swipe(123.0, 45.0, 123.0, 45.0), None);
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(swipe(0.0, 0.0, 50.0, 0.0), None);
        assert_eq!(swipe(0.0, 0.0, -50.0, 0.0), None);
        assert_eq!(swipe(0.0, 0.0, 0.0, 50.0), None);
        assert_eq!(swipe(0.0, 0.0, 0.0, -50.0), None);
        assert_eq!(swipe(0.0, 0.0, 50.5, 0.0), Some(SwipeDirection::Right));
        assert_eq!(swipe(0.0, 0.0, 0.0, -50.5), Some(SwipeDirection::Up));
    }

    #[test]
    fn equal_magnitudes_take_the_vertical_branch() {
        assert_eq!(swipe(0.0, 0.0, 60.0, 60.0), Some(SwipeDirection::Down));
        assert_eq!(swipe(0.0, 0.0, 60.0, -60.0), Some(SwipeDirection::Up));
        assert_eq!(swipe(0.0, 0.0, -80.0, 80.0), Some(SwipeDirection::Down));
        assert_eq!(swipe(0.0, 0.0, 50.0, 50.0), None);
    }

    #[test]
    fn dominant_axis_decides_even_with_large_minor_axis() {
        assert_eq!(swipe(0.0, 0.0, 120.0, 90.0), Some(SwipeDirection::Right));
        assert_eq!(swipe(0.0, 0.0, -90.0, -120.0), Some(SwipeDirection::Up));
        // Horizontal dominates but stays under the threshold; the vertical axis is not consulted.
        assert_eq!(swipe(0.0, 0.0, 45.0, 40.0), None);
    }

    #[test]
    fn only_displacement_matters() {
        assert_eq!(swipe(300.0, 500.0, 200.0, 490.0), Some(SwipeDirection::Left));
        assert_eq!(swipe(-20.0, -20.0, -25.0, 60.0), Some(SwipeDirection::Down));
    }
}
