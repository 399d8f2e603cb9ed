//! The part of the complex plane being looked at.

use log::trace;

use crate::settings::{
    INITIAL_CENTER, INITIAL_MAX_ITERATION, INITIAL_ZOOM, MAX_MAX_ITERATION, MAX_ZOOM,
    MIN_MAX_ITERATION, MIN_ZOOM, MOVEMENT_SPEED,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit(self) -> [f32; 2] {
        match self {
            Direction::Up => [0.0, 1.0],
            Direction::Down => [0.0, -1.0],
            Direction::Left => [-1.0, 0.0],
            Direction::Right => [1.0, 0.0],
        }
    }
}

/**
Explorer state: where the view is centred, how far in it is zoomed, and how
many iterations the fragment shader runs before declaring a point bounded.

Every mutating method leaves `zoom` in `[MIN_ZOOM, MAX_ZOOM]` and
`max_iteration` in `[MIN_MAX_ITERATION, MAX_MAX_ITERATION]`.

Time-dependent methods take `seconds`, the length of the previous frame, so
movement speed doesn't depend on frame rate.
*/
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub center: [f32; 2],
    pub zoom: f32,
    pub max_iteration: i32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
            max_iteration: INITIAL_MAX_ITERATION,
        }
    }
}

impl View {
    /// Moving speed is inversely proportional to the zoom, so a key press
    /// always moves the same fraction of the screen.
    pub fn pan(&mut self, direction: Direction, seconds: f32) {
        let step = MOVEMENT_SPEED / self.zoom * seconds;
        let [dx, dy] = direction.unit();
        self.center[0] += dx * step;
        self.center[1] += dy * step;
        self.clamp();
        trace!("pan {:?}: center = {:?}", direction, self.center);
    }

    pub fn zoom_in(&mut self, seconds: f32) {
        self.zoom += self.zoom * MOVEMENT_SPEED * seconds;
        self.clamp();
        trace!("zoom in: zoom = {}", self.zoom);
    }

    pub fn zoom_out(&mut self, seconds: f32) {
        self.zoom -= self.zoom * MOVEMENT_SPEED * seconds;
        self.clamp();
        trace!("zoom out: zoom = {}", self.zoom);
    }

    pub fn increase_iterations(&mut self) {
        self.max_iteration = self.max_iteration.saturating_add(1);
        self.clamp();
        trace!("max_iteration = {}", self.max_iteration);
    }

    pub fn decrease_iterations(&mut self) {
        self.max_iteration = self.max_iteration.saturating_sub(1);
        self.clamp();
        trace!("max_iteration = {}", self.max_iteration);
    }

    pub fn clamp(&mut self) {
        // `f32::clamp` propagates NaN; fall back to the lower bound instead.
        self.zoom = if self.zoom.is_nan() {
            MIN_ZOOM
        } else {
            self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };
        self.max_iteration = self
            .max_iteration
            .clamp(MIN_MAX_ITERATION, MAX_MAX_ITERATION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn starts_at_initial_values() {
        let view = View::default();
        assert_eq!(view.center, [-1.0, 0.0]);
        assert_eq!(view.zoom, 0.25);
        assert_eq!(view.max_iteration, 40);
    }

    #[test]
    fn zoom_never_exceeds_maximum() {
        let mut view = View::default();
        for _ in 0..1000 {
            view.zoom_in(0.5);
            assert!(view.zoom <= MAX_ZOOM);
        }
        assert_eq!(view.zoom, MAX_ZOOM);
    }

    #[test]
    fn zoom_never_drops_below_minimum() {
        let mut view = View {
            zoom: 3.0,
            ..View::default()
        };
        for _ in 0..100 {
            view.zoom_out(0.5);
            assert!(view.zoom >= MIN_ZOOM);
        }
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn long_frame_cannot_zoom_out_past_minimum() {
        // A frame longer than a second would otherwise make the zoom negative.
        let mut view = View {
            zoom: 100.0,
            ..View::default()
        };
        view.zoom_out(3.0);
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn zoom_delta_scales_with_zoom_and_frame_time() {
        let mut view = View {
            zoom: 2.0,
            ..View::default()
        };
        view.zoom_in(0.1);
        assert!(approx_eq(view.zoom, 2.0 + 2.0 * MOVEMENT_SPEED * 0.1));

        view.zoom = 8.0;
        view.zoom_out(0.25);
        assert!(approx_eq(view.zoom, 8.0 - 8.0 * MOVEMENT_SPEED * 0.25));
    }

    #[test]
    fn pan_delta_is_inversely_proportional_to_zoom() {
        let mut near = View {
            center: [0.0, 0.0],
            zoom: 4.0,
            ..View::default()
        };
        let mut far = View {
            center: [0.0, 0.0],
            zoom: 1.0,
            ..View::default()
        };
        near.pan(Direction::Right, 0.5);
        far.pan(Direction::Right, 0.5);

        assert!(approx_eq(near.center[0], MOVEMENT_SPEED / 4.0 * 0.5));
        assert!(approx_eq(far.center[0], MOVEMENT_SPEED / 1.0 * 0.5));
        assert_eq!(near.center[1], 0.0);
    }

    #[test]
    fn pan_moves_along_each_axis() {
        let seconds = 0.2;
        let mut view = View {
            center: [0.0, 0.0],
            zoom: 1.0,
            ..View::default()
        };

        view.pan(Direction::Up, seconds);
        assert!(approx_eq(view.center[1], seconds));
        view.pan(Direction::Down, seconds);
        view.pan(Direction::Down, seconds);
        assert!(approx_eq(view.center[1], -seconds));

        view.pan(Direction::Left, seconds);
        assert!(approx_eq(view.center[0], -seconds));
        view.pan(Direction::Right, seconds);
        assert!(approx_eq(view.center[0], 0.0));
    }

    #[test]
    fn zero_frame_time_does_not_move() {
        let mut view = View::default();
        view.pan(Direction::Up, 0.0);
        view.zoom_in(0.0);
        assert_eq!(view, View::default());
    }

    #[test]
    fn iterations_stay_within_bounds() {
        let mut view = View::default();
        for _ in 0..2000 {
            view.increase_iterations();
        }
        assert_eq!(view.max_iteration, MAX_MAX_ITERATION);

        for _ in 0..2000 {
            view.decrease_iterations();
        }
        assert_eq!(view.max_iteration, MIN_MAX_ITERATION);
    }

    #[test]
    fn iterations_step_by_one() {
        let mut view = View::default();
        view.increase_iterations();
        assert_eq!(view.max_iteration, 41);
        view.decrease_iterations();
        view.decrease_iterations();
        assert_eq!(view.max_iteration, 39);
    }

    #[test]
    fn clamp_repairs_out_of_range_state() {
        let mut view = View {
            center: [0.0, 0.0],
            zoom: f32::NAN,
            max_iteration: i32::MIN,
        };
        view.clamp();
        assert_eq!(view.zoom, MIN_ZOOM);
        assert_eq!(view.max_iteration, MIN_MAX_ITERATION);

        view.zoom = f32::INFINITY;
        view.max_iteration = i32::MAX;
        view.clamp();
        assert_eq!(view.zoom, MAX_ZOOM);
        assert_eq!(view.max_iteration, MAX_MAX_ITERATION);
    }
}
