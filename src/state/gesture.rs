// Short-lived tracking state for one pan or pinch interaction.
use crate::model::{Point, Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch,
}

/// Which gesture currently owns the transform.
///
/// A drag remembers `pointer - translation` at the moment it was (re)anchored;
/// a pinch remembers the last inter-touch distance and midpoint so each move
/// applies an incremental ratio and pan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    #[default]
    Idle,
    Dragging {
        source: DragSource,
        anchor: Point,
    },
    Pinching {
        last_distance: f64,
        last_mid: Point,
    },
}

impl GestureSession {
    pub fn drag(source: DragSource, pointer: Point, current: &Transform) -> Self {
        GestureSession::Dragging {
            source,
            anchor: pointer.sub(current.translation()),
        }
    }

    pub fn pinch(a: Point, b: Point) -> Self {
        GestureSession::Pinching {
            last_distance: a.distance(b),
            last_mid: a.midpoint(b),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureSession::Idle)
    }

    pub fn drag_anchor(&self, want: DragSource) -> Option<Point> {
        match *self {
            GestureSession::Dragging { source, anchor } if source == want => Some(anchor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_anchor_is_pointer_minus_translation() {
        let t = Transform {
            x: 30.0,
            y: -10.0,
            scale: 2.0,
        };
        let s = GestureSession::drag(DragSource::Mouse, Point::new(100.0, 50.0), &t);
        assert_eq!(s.drag_anchor(DragSource::Mouse), Some(Point::new(70.0, 60.0)));
        assert_eq!(s.drag_anchor(DragSource::Touch), None);
    }

    #[test]
    fn pinch_records_distance() {
        let s = GestureSession::pinch(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(
            s,
            GestureSession::Pinching {
                last_distance: 5.0,
                last_mid: Point::new(1.5, 2.0),
            }
        );
        assert!(!s.is_idle());
        assert!(GestureSession::default().is_idle());
    }
}
