use std::time::Instant;

/// Measures how long the previous frame took.
pub struct FrameClock {
    previous: Instant,
    seconds_per_frame: f32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            previous: now,
            seconds_per_frame: 0.0,
        }
    }

    /// Call once at the start of every frame.
    pub fn tick(&mut self, now: Instant) {
        self.seconds_per_frame = now.saturating_duration_since(self.previous).as_secs_f32();
        self.previous = now;
    }

    pub fn seconds_per_frame(&self) -> f32 {
        self.seconds_per_frame
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn no_time_has_passed_before_first_tick() {
        let clock = FrameClock::new(Instant::now());
        assert_eq!(clock.seconds_per_frame(), 0.0);
    }

    #[test]
    fn tick_measures_time_since_previous_tick() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);

        clock.tick(start + Duration::from_millis(16));
        assert!((clock.seconds_per_frame() - 0.016).abs() < 1e-6);

        clock.tick(start + Duration::from_millis(66));
        assert!((clock.seconds_per_frame() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn tick_with_earlier_instant_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new(start);
        clock.tick(start - Duration::from_millis(10));
        assert_eq!(clock.seconds_per_frame(), 0.0);
    }
}
