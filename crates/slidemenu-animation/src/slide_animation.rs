use crate::Easing;

/// A timed animation over a relative horizontal delta.
///
/// The animation interpolates from 0 to `total_delta` and reports motion as
/// *increments*: each [`tick`](Self::tick) returns the difference between the
/// newly eased position and the last one applied, so the owner can add it to
/// whatever translation the row currently has. Starting a replacement
/// animation therefore never causes a jump; the row simply continues from its
/// real translation.
///
/// Dropping a `SlideAnimation` is its cancellation; [`force_finish`]
/// (Self::force_finish) instead returns the remaining delta so the owner can
/// complete the motion immediately.
#[derive(Debug, Clone)]
pub struct SlideAnimation {
    total_delta: f32,
    duration_ms: u32,
    easing: Easing,
    start_time_ms: Option<i64>,
    last_applied: f32,
    finished: bool,
}

impl SlideAnimation {
    pub fn new(total_delta: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            total_delta,
            duration_ms,
            easing,
            start_time_ms: None,
            last_applied: 0.0,
            finished: false,
        }
    }

    /// Advances to `now_ms` and returns the increment to apply to the row.
    ///
    /// The first tick anchors the start time. Returns 0.0 once finished.
    pub fn tick(&mut self, now_ms: i64) -> f32 {
        if self.finished {
            return 0.0;
        }
        let start = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0) as f32;
        let duration = self.duration_ms.max(1) as f32;
        let linear = (elapsed / duration).clamp(0.0, 1.0);
        let applied = self.easing.transform(linear) * self.total_delta;
        let increment = applied - self.last_applied;
        self.last_applied = applied;
        if linear >= 1.0 {
            self.finished = true;
        }
        increment
    }

    /// Ends the animation immediately, returning the delta not yet applied.
    pub fn force_finish(&mut self) -> f32 {
        if self.finished {
            return 0.0;
        }
        let remaining = self.total_delta - self.last_applied;
        self.last_applied = self.total_delta;
        self.finished = true;
        remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn total_delta(&self) -> f32 {
        self.total_delta
    }

    pub fn last_applied(&self) -> f32 {
        self.last_applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_sum_to_total_delta() {
        let mut anim = SlideAnimation::new(-200.0, 500, Easing::Linear);
        let mut applied = 0.0;
        let mut now = 1_000;
        while !anim.is_finished() {
            applied += anim.tick(now);
            now += 16;
        }
        assert!((applied - -200.0).abs() < 1e-3, "applied {applied}");
        assert_eq!(anim.last_applied(), anim.total_delta());
    }

    #[test]
    fn first_tick_anchors_start_time() {
        let mut anim = SlideAnimation::new(100.0, 100, Easing::Linear);
        // Anchor at an arbitrary late time; no motion has happened yet.
        assert_eq!(anim.tick(50_000), 0.0);
        let half = anim.tick(50_050);
        assert!((half - 50.0).abs() < 1e-3, "half {half}");
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut anim = SlideAnimation::new(-150.0, 0, Easing::viscous_fluid());
        let increment = anim.tick(123);
        assert_eq!(increment, -150.0);
        assert!(anim.is_finished());
        assert_eq!(anim.tick(456), 0.0);
    }

    #[test]
    fn force_finish_returns_remaining() {
        let mut anim = SlideAnimation::new(-200.0, 500, Easing::Linear);
        let mut applied = anim.tick(0);
        applied += anim.tick(250);
        assert!(!anim.is_finished());
        let remaining = anim.force_finish();
        assert!(anim.is_finished());
        assert!((applied + remaining - -200.0).abs() < 1e-3);
        assert_eq!(anim.force_finish(), 0.0);
    }

    #[test]
    fn ticks_after_finish_are_inert() {
        let mut anim = SlideAnimation::new(80.0, 100, Easing::Linear);
        anim.tick(0);
        anim.tick(200);
        assert!(anim.is_finished());
        assert_eq!(anim.tick(300), 0.0);
    }

    #[test]
    fn overshoot_travels_past_total_then_settles_back() {
        let mut anim = SlideAnimation::new(-200.0, 500, Easing::overshoot());
        let mut applied = 0.0;
        let mut past_target = false;
        let mut now = 0;
        while !anim.is_finished() {
            applied += anim.tick(now);
            if applied < -200.0 {
                past_target = true;
            }
            now += 16;
        }
        assert!(past_target, "overshoot never went past the target");
        assert!((applied - -200.0).abs() < 1e-3);
    }
}
