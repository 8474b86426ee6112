//! Easing curves for opening and closing a row menu.
//!
//! The pairing is deliberately asymmetric: motion toward the revealed menu
//! uses an overshoot curve (a slight bounce past the open position before
//! settling), while motion back toward rest uses a viscous-fluid decay (fast
//! start, long decelerating tail).

/// Tension of the default overshoot curve.
const OVERSHOOT_TENSION: f32 = 1.0;

/// Scale of the default viscous-fluid curve.
const VISCOUS_FLUID_SCALE: f32 = 6.66;

/// Easing functions for slide animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Flings past the target and springs back; `tension` controls how far.
    Overshoot { tension: f32 },
    /// Viscous decay: rapid initial motion decaying exponentially toward the
    /// target; `scale` controls how much of the curve is spent decaying.
    ViscousFluid { scale: f32 },
}

impl Easing {
    /// The overshoot curve used when a menu springs open.
    pub fn overshoot() -> Self {
        Easing::Overshoot {
            tension: OVERSHOOT_TENSION,
        }
    }

    /// The viscous-fluid curve used when a menu settles closed.
    pub fn viscous_fluid() -> Self {
        Easing::ViscousFluid {
            scale: VISCOUS_FLUID_SCALE,
        }
    }

    /// Apply the easing function to a linear fraction.
    ///
    /// Inputs at or past the endpoints map to exactly 0.0 and 1.0 so that a
    /// finished animation lands on its target without residue. In between,
    /// `Overshoot` may return values greater than 1.0.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => fraction,
            Easing::Overshoot { tension } => overshoot(*tension, fraction),
            Easing::ViscousFluid { scale } => viscous_fluid_normalized(*scale, fraction),
        }
    }
}

fn overshoot(tension: f32, fraction: f32) -> f32 {
    let t = fraction - 1.0;
    t * t * ((tension + 1.0) * t + tension) + 1.0
}

fn viscous_fluid_raw(scale: f32, fraction: f32) -> f32 {
    let x = fraction * scale;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e == exp(-1)
        let start = 0.367_879_44_f32;
        let tail = 1.0 - (1.0 - x).exp();
        start + tail * (1.0 - start)
    }
}

fn viscous_fluid_normalized(scale: f32, fraction: f32) -> f32 {
    let normalize = 1.0 / viscous_fluid_raw(scale, 1.0);
    // Account for very small floating-point error in the normalization.
    let offset = 1.0 - normalize * viscous_fluid_raw(scale, 1.0);
    let interpolated = normalize * viscous_fluid_raw(scale, fraction);
    if interpolated > 0.0 {
        interpolated + offset
    } else {
        interpolated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::overshoot(),
            Easing::viscous_fluid(),
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
            assert_eq!(easing.transform(-0.5), 0.0);
            assert_eq!(easing.transform(1.5), 1.0);
        }
    }

    #[test]
    fn overshoot_exceeds_target_midway() {
        let easing = Easing::overshoot();
        let peak = (1..100)
            .map(|i| easing.transform(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0, "expected overshoot past 1.0, peak was {peak}");
    }

    #[test]
    fn viscous_fluid_front_loads_motion() {
        let easing = Easing::viscous_fluid();
        // Most of the travel happens in the first third of the duration.
        assert!(easing.transform(0.33) > 0.8);
        // And the curve never goes past the target.
        for i in 1..100 {
            let value = easing.transform(i as f32 / 100.0);
            assert!(value <= 1.0 + f32::EPSILON);
        }
    }

    #[test]
    fn viscous_fluid_is_monotonic() {
        let easing = Easing::viscous_fluid();
        let mut prev = 0.0;
        for i in 0..=100 {
            let value = easing.transform(i as f32 / 100.0);
            assert!(value >= prev);
            prev = value;
        }
    }
}
