// Pan/zoom state machine shared by mouse, wheel, touch and button input.
use crate::model::{Point, Transform, ViewerConfig};

use super::gesture::{DragSource, GestureSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Owns the live [`Transform`] and the gesture in progress.
///
/// Every operation is total: events that arrive without a matching begin
/// (a move with no drag, a pinch move with a stale distance) are ignored.
/// Client positions are client (viewport) coordinates as reported by
/// `clientX`/`clientY`; `origin` is the viewport element's top-left corner
/// from `getBoundingClientRect`, in the same space.
#[derive(Clone, Debug, Default)]
pub struct TransformController {
    transform: Transform,
    session: GestureSession,
    config: ViewerConfig,
}

impl TransformController {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            transform: Transform::IDENTITY,
            session: GestureSession::Idle,
            config,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn session(&self) -> GestureSession {
        self.session
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ViewerConfig) {
        self.transform.scale = config.clamp_scale(self.transform.scale);
        self.config = config;
    }

    /// True while a mouse drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.drag_anchor(DragSource::Mouse).is_some()
    }

    /// True while any drag or pinch owns the transform.
    pub fn gesture_active(&self) -> bool {
        !self.session.is_idle()
    }

    pub fn apply_wheel(&mut self, client: Point, delta_y: f64, origin: Point) {
        let factor = self.config.wheel_factor(delta_y);
        let local = client.sub(origin);
        self.transform = self.transform.zoomed_at(local, factor, &self.config);
    }

    pub fn begin_drag(&mut self, client: Point) {
        self.session = GestureSession::drag(DragSource::Mouse, client, &self.transform);
        log::debug!("drag start at ({}, {})", client.x, client.y);
    }

    pub fn continue_drag(&mut self, client: Point) {
        if let Some(anchor) = self.session.drag_anchor(DragSource::Mouse) {
            self.transform = self.transform.with_translation(client.sub(anchor));
        }
    }

    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            self.session = GestureSession::Idle;
            log::debug!("drag end");
        }
    }

    pub fn begin_touch(&mut self, touches: &[Point]) {
        match touches {
            [only] => {
                self.session = GestureSession::drag(DragSource::Touch, *only, &self.transform);
            }
            [a, b] => {
                self.session = GestureSession::pinch(*a, *b);
                log::debug!("pinch start, distance {}", a.distance(*b));
            }
            // zero touches cannot start anything; three or more are ignored
            _ => {}
        }
    }

    pub fn continue_touch(&mut self, touches: &[Point], origin: Point) {
        match (touches, self.session) {
            ([only], GestureSession::Dragging { source: DragSource::Touch, anchor }) => {
                self.transform = self.transform.with_translation(only.sub(anchor));
            }
            ([a, b], GestureSession::Pinching { last_distance, last_mid }) => {
                let distance = a.distance(*b);
                let mid = a.midpoint(*b);
                // the pair's midpoint carries the payload, then the spread zooms around it
                let pan = mid.sub(last_mid);
                if pan.x.is_finite() && pan.y.is_finite() {
                    let t = self.transform.translation();
                    self.transform = self
                        .transform
                        .with_translation(Point::new(t.x + pan.x, t.y + pan.y));
                }
                if last_distance > 0.0 && last_distance.is_finite() && distance.is_finite() {
                    let factor = distance / last_distance;
                    self.transform = self.transform.zoomed_at(mid.sub(origin), factor, &self.config);
                }
                self.session = GestureSession::Pinching {
                    last_distance: distance,
                    last_mid: mid,
                };
            }
            _ => {}
        }
    }

    /// `remaining` lists the contacts still down after the lift.
    pub fn end_touch(&mut self, remaining: &[Point]) {
        match remaining {
            [] => {
                if !matches!(
                    self.session,
                    GestureSession::Dragging {
                        source: DragSource::Mouse,
                        ..
                    }
                ) {
                    self.session = GestureSession::Idle;
                }
            }
            [only] => {
                // re-anchor from where the transform is now, not from pinch state
                self.session = GestureSession::drag(DragSource::Touch, *only, &self.transform);
                log::debug!("pinch handed off to single-touch drag");
            }
            [a, b] => {
                self.session = GestureSession::pinch(*a, *b);
            }
            _ => {}
        }
    }

    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => self.config.button_zoom_in,
            ZoomDirection::Out => self.config.button_zoom_out,
        };
        self.transform = self.transform.scaled(factor, &self.config);
    }

    pub fn reset(&mut self) {
        self.transform = Transform::IDENTITY;
        log::debug!("transform reset");
    }

    /// Drop any in-flight gesture, e.g. when the viewer unmounts.
    pub fn cancel_gesture(&mut self) {
        self.session = GestureSession::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(0.0, 0.0);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn controller() -> TransformController {
        TransformController::new(ViewerConfig::default())
    }

    #[test]
    fn wheel_zoom_in_at_cursor() {
        let mut c = controller();
        c.apply_wheel(Point::new(100.0, 100.0), -100.0, ORIGIN);
        let t = c.transform();
        assert!(approx(t.scale, 1.1));
        assert!(approx(t.x, -10.0));
        assert!(approx(t.y, -10.0));
    }

    #[test]
    fn wheel_uses_viewport_local_coordinates() {
        let mut c = controller();
        let origin = Point::new(40.0, 60.0);
        c.apply_wheel(Point::new(140.0, 160.0), 120.0, origin);
        let t = c.transform();
        assert!(approx(t.scale, 0.9));
        assert!(approx(t.x, 100.0 - 0.9 * 100.0));
        assert!(approx(t.y, 100.0 - 0.9 * 100.0));
    }

    #[test]
    fn scale_stays_clamped_over_many_events() {
        let mut c = controller();
        for _ in 0..200 {
            c.apply_wheel(Point::new(50.0, 50.0), -1.0, ORIGIN);
            let s = c.transform().scale;
            assert!((0.25..=5.0).contains(&s));
        }
        assert_eq!(c.transform().scale, 5.0);
        for _ in 0..200 {
            c.zoom_step(ZoomDirection::Out);
            let s = c.transform().scale;
            assert!((0.25..=5.0).contains(&s));
        }
        assert_eq!(c.transform().scale, 0.25);
        c.begin_touch(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        c.continue_touch(&[Point::new(0.0, 0.0), Point::new(1000.0, 0.0)], ORIGIN);
        assert_eq!(c.transform().scale, 5.0);
    }

    #[test]
    fn drag_is_linear_and_scale_independent() {
        let mut c = controller();
        c.zoom_step(ZoomDirection::In);
        c.zoom_step(ZoomDirection::In);
        c.apply_wheel(Point::new(30.0, 40.0), -1.0, ORIGIN);
        let t0 = c.transform();
        c.begin_drag(Point::new(10.0, 20.0));
        assert!(c.is_dragging());
        c.continue_drag(Point::new(55.0, -5.0));
        let t1 = c.transform();
        assert!(approx(t1.x, t0.x + 45.0));
        assert!(approx(t1.y, t0.y - 25.0));
        assert_eq!(t1.scale, t0.scale);
        c.end_drag();
        assert!(!c.is_dragging());
    }

    #[test]
    fn drag_move_without_begin_is_ignored() {
        let mut c = controller();
        c.continue_drag(Point::new(300.0, 300.0));
        assert_eq!(c.transform(), Transform::IDENTITY);
        c.end_drag();
        c.end_drag();
        assert!(c.session().is_idle());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut c = controller();
        c.apply_wheel(Point::new(10.0, 10.0), -1.0, ORIGIN);
        c.reset();
        let once = c.transform();
        c.reset();
        assert_eq!(once, Transform::IDENTITY);
        assert_eq!(c.transform(), once);
    }

    #[test]
    fn zoom_step_clamps_at_max() {
        let mut c = controller();
        c.begin_touch(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        c.continue_touch(&[Point::new(0.0, 0.0), Point::new(450.0, 0.0)], ORIGIN);
        c.end_touch(&[]);
        assert!(approx(c.transform().scale, 4.5));
        let before = c.transform().translation();
        c.zoom_step(ZoomDirection::In);
        assert_eq!(c.transform().scale, 5.0);
        assert_eq!(c.transform().translation(), before);
    }

    #[test]
    fn pinch_outward_doubles_scale() {
        let mut c = controller();
        c.begin_touch(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
        c.continue_touch(&[Point::new(50.0, 100.0), Point::new(250.0, 100.0)], ORIGIN);
        let t = c.transform();
        assert!(approx(t.scale, 2.0));
        // midpoint (150, 100) stays fixed
        let w = t.local_to_world(Point::new(150.0, 100.0));
        assert!(approx(w.x, 150.0));
        assert!(approx(w.y, 100.0));
        assert_eq!(
            c.session(),
            GestureSession::Pinching {
                last_distance: 200.0,
                last_mid: Point::new(150.0, 100.0),
            }
        );
    }

    #[test]
    fn pinch_is_incremental() {
        let mut c = controller();
        c.begin_touch(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        c.continue_touch(&[Point::new(0.0, 0.0), Point::new(150.0, 0.0)], ORIGIN);
        c.continue_touch(&[Point::new(0.0, 0.0), Point::new(150.0, 0.0)], ORIGIN);
        assert!(approx(c.transform().scale, 1.5));
        c.continue_touch(&[Point::new(0.0, 0.0), Point::new(300.0, 0.0)], ORIGIN);
        assert!(approx(c.transform().scale, 3.0));
    }

    #[test]
    fn pinch_from_zero_distance_does_not_zoom() {
        let mut c = controller();
        c.begin_touch(&[Point::new(10.0, 10.0), Point::new(10.0, 10.0)]);
        c.continue_touch(&[Point::new(0.0, 10.0), Point::new(20.0, 10.0)], ORIGIN);
        assert_eq!(c.transform(), Transform::IDENTITY);
        c.continue_touch(&[Point::new(0.0, 10.0), Point::new(40.0, 10.0)], ORIGIN);
        assert!(approx(c.transform().scale, 2.0));
    }

    #[test]
    fn finger_lift_reanchors_without_jump() {
        let mut c = controller();
        c.begin_touch(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
        c.continue_touch(&[Point::new(80.0, 90.0), Point::new(260.0, 120.0)], ORIGIN);
        let after_pinch = c.transform();
        c.end_touch(&[Point::new(260.0, 120.0)]);
        assert_eq!(c.transform(), after_pinch);
        c.continue_touch(&[Point::new(260.0, 120.0)], ORIGIN);
        let still = c.transform();
        assert!(approx(still.x, after_pinch.x));
        assert!(approx(still.y, after_pinch.y));
        c.continue_touch(&[Point::new(270.0, 100.0)], ORIGIN);
        let t = c.transform();
        assert!(approx(t.x, after_pinch.x + 10.0));
        assert!(approx(t.y, after_pinch.y - 20.0));
        assert_eq!(t.scale, after_pinch.scale);
    }

    #[test]
    fn single_touch_pans() {
        let mut c = controller();
        c.begin_touch(&[Point::new(10.0, 10.0)]);
        c.continue_touch(&[Point::new(30.0, 5.0)], ORIGIN);
        assert_eq!(c.transform().translation(), Point::new(20.0, -5.0));
        c.end_touch(&[]);
        assert!(c.session().is_idle());
        c.continue_touch(&[Point::new(90.0, 90.0)], ORIGIN);
        assert_eq!(c.transform().translation(), Point::new(20.0, -5.0));
    }

    #[test]
    fn extra_touches_are_ignored() {
        let mut c = controller();
        let three = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
        c.begin_touch(&three);
        assert!(c.session().is_idle());
        c.continue_touch(&three, ORIGIN);
        assert_eq!(c.transform(), Transform::IDENTITY);
        c.end_touch(&[Point::new(0.0, 0.0), Point::new(50.0, 0.0)]);
        assert_eq!(
            c.session(),
            GestureSession::Pinching {
                last_distance: 50.0,
                last_mid: Point::new(25.0, 0.0),
            }
        );
    }

    #[test]
    fn two_finger_parallel_move_pans() {
        let mut c = controller();
        c.begin_touch(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
        c.continue_touch(&[Point::new(150.0, 150.0), Point::new(250.0, 150.0)], ORIGIN);
        let t = c.transform();
        assert_eq!(t.scale, 1.0);
        assert!(approx(t.x, 50.0));
        assert!(approx(t.y, 50.0));
    }

    #[test]
    fn pinch_while_moving_keeps_content_under_fingers() {
        let mut c = controller();
        let origin = Point::new(20.0, 30.0);
        c.begin_touch(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
        let before = c.transform().local_to_world(Point::new(150.0, 100.0).sub(origin));
        // spread to twice the distance while the midpoint travels to (180, 140)
        c.continue_touch(&[Point::new(80.0, 140.0), Point::new(280.0, 140.0)], origin);
        let t = c.transform();
        assert!(approx(t.scale, 2.0));
        let after = t.local_to_world(Point::new(180.0, 140.0).sub(origin));
        assert!(approx(before.x, after.x));
        assert!(approx(before.y, after.y));
    }

    #[test]
    fn touch_pan_and_pinch_count_as_active_gestures() {
        let mut c = controller();
        assert!(!c.gesture_active());
        c.begin_touch(&[Point::new(10.0, 10.0)]);
        assert!(c.gesture_active());
        assert!(!c.is_dragging());
        c.begin_touch(&[Point::new(10.0, 10.0), Point::new(60.0, 10.0)]);
        assert!(c.gesture_active());
        assert!(!c.is_dragging());
        c.end_touch(&[]);
        assert!(!c.gesture_active());
        c.begin_drag(Point::new(0.0, 0.0));
        assert!(c.gesture_active() && c.is_dragging());
        c.end_drag();
        assert!(!c.gesture_active());
    }

    #[test]
    fn mouse_and_touch_sessions_do_not_cross() {
        let mut c = controller();
        c.begin_touch(&[Point::new(0.0, 0.0)]);
        c.continue_drag(Point::new(100.0, 100.0));
        assert_eq!(c.transform(), Transform::IDENTITY);
        c.end_drag();
        assert!(!c.session().is_idle());

        c.begin_drag(Point::new(0.0, 0.0));
        c.continue_touch(&[Point::new(50.0, 50.0)], ORIGIN);
        assert_eq!(c.transform(), Transform::IDENTITY);
        c.end_touch(&[]);
        assert!(c.is_dragging());
    }

    #[test]
    fn set_config_reclamps_scale() {
        let mut c = controller();
        c.zoom_step(ZoomDirection::In);
        c.zoom_step(ZoomDirection::In);
        c.set_config(ViewerConfig {
            max_scale: 1.2,
            ..ViewerConfig::default()
        });
        assert_eq!(c.transform().scale, 1.2);
        assert_eq!(c.config().max_scale, 1.2);
    }
}
