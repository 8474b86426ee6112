//! The translation engine: applies horizontal deltas to rows, keeps the
//! slide registry consistent, and steps per-row animations from the external
//! frame clock.
//!
//! All mutable slide state lives here, keyed by [`RowId`] in explicit side
//! tables; nothing is stored on the rows themselves.

use rustc_hash::FxHashMap;
use slidemenu_animation::{Easing, SlideAnimation};

use crate::gesture_constants::{BOUNDARY_SNAP_EPSILON, OPENED_THRESHOLD_FRACTION};
use crate::host::{RowHost, RowId};
use crate::metrics::{open_sign, resolve_menu_metrics, MenuMetrics};
use crate::registry::SlideRegistry;

pub struct TranslationEngine {
    metrics: FxHashMap<RowId, MenuMetrics>,
    animations: FxHashMap<RowId, SlideAnimation>,
    registry: SlideRegistry,
}

impl Default for TranslationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationEngine {
    pub fn new() -> Self {
        Self {
            metrics: FxHashMap::default(),
            animations: FxHashMap::default(),
            registry: SlideRegistry::new(),
        }
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SlideRegistry {
        &mut self.registry
    }

    /// Recomputes and caches the row's menu metrics, returning whether the
    /// row has a menu at all. Called on touch-down over a row, so metrics
    /// stale from an external re-layout are refreshed before use.
    pub fn resolve_and_cache(&mut self, host: &dyn RowHost, row: RowId) -> bool {
        match resolve_menu_metrics(host, row) {
            Some(metrics) => {
                self.metrics.insert(row, metrics);
                true
            }
            None => {
                self.metrics.remove(&row);
                false
            }
        }
    }

    pub fn metrics(&self, row: RowId) -> Option<&MenuMetrics> {
        self.metrics.get(&row)
    }

    /// Adds `dx` to the row's translation, clamped so the result stays
    /// within `[0, total_width]` signed by the reveal direction. Cancels any
    /// pending animation for the row first; the direct translation continues
    /// from the row's current real position.
    pub fn apply_delta(&mut self, host: &mut dyn RowHost, row: RowId, dx: f32) {
        self.cancel_animation(host, row);
        self.apply_translation(host, row, dx, true);
    }

    /// Jumps the row's translation to an absolute position immediately.
    pub fn translate_to(&mut self, host: &mut dyn RowHost, row: RowId, target_tx: f32) {
        let dx = target_tx - host.row_translation(row);
        self.apply_delta(host, row, dx);
    }

    /// Animates the row's translation to an absolute position.
    ///
    /// Replaces any pending animation for the row; the replacement's delta is
    /// computed from the row's current real translation, so the hand-off is
    /// continuous. Motion toward the revealed menu uses the overshoot curve,
    /// motion toward rest the viscous-fluid curve. A zero duration or zero
    /// delta applies immediately with no animation object.
    pub fn smooth_translate_to(
        &mut self,
        host: &mut dyn RowHost,
        row: RowId,
        target_tx: f32,
        duration_ms: u32,
    ) {
        let current = host.row_translation(row);
        let dx = target_tx - current;
        if dx != 0.0 && duration_ms > 0 {
            let toward_open = dx * open_sign(host.layout_direction(row)) > 0.0;
            let easing = if toward_open {
                Easing::overshoot()
            } else {
                Easing::viscous_fluid()
            };
            let replaced = self
                .animations
                .insert(row, SlideAnimation::new(dx, duration_ms, easing));
            if replaced.is_none() {
                host.promote_row_layers(row);
            }
        } else {
            self.cancel_animation(host, row);
            self.apply_translation(host, row, dx, true);
        }
    }

    /// Drives the row back to its neutral position, animated when
    /// `duration_ms` is positive. The only path besides boundary departure
    /// that clears the fully-open mark for the row. Releasing a row already
    /// at rest is an identity operation.
    pub fn release(&mut self, host: &mut dyn RowHost, row: RowId, duration_ms: u32) {
        if duration_ms > 0 {
            self.smooth_translate_to(host, row, 0.0, duration_ms);
        } else {
            self.translate_to(host, row, 0.0);
        }
        self.registry.clear_fully_open(row);
    }

    /// Steps every pending animation to `now_ms`. The single dispatch point
    /// for animation progress; finished animations are dropped after their
    /// last increment is applied.
    pub fn on_frame(&mut self, host: &mut dyn RowHost, now_ms: i64) {
        if self.animations.is_empty() {
            return;
        }
        let rows: Vec<RowId> = self.animations.keys().copied().collect();
        for row in rows {
            let (increment, finished) = match self.animations.get_mut(&row) {
                Some(animation) => (animation.tick(now_ms), animation.is_finished()),
                None => continue,
            };
            if increment != 0.0 {
                // Animation increments bypass the clamp: the overshoot curve
                // deliberately travels a little past the open extreme.
                self.apply_translation(host, row, increment, false);
            }
            if finished {
                self.animations.remove(&row);
                host.restore_row_layers(row);
            }
        }
    }

    pub fn has_pending_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn is_animating(&self, row: RowId) -> bool {
        self.animations.contains_key(&row)
    }

    /// Force-completes every in-flight animation: each applies its remaining
    /// delta immediately, leaving no row at a mid-animation translation.
    pub fn force_finish_all(&mut self, host: &mut dyn RowHost) {
        let rows: Vec<RowId> = self.animations.keys().copied().collect();
        for row in rows {
            let remaining = match self.animations.get_mut(&row) {
                Some(animation) => animation.force_finish(),
                None => continue,
            };
            if remaining != 0.0 {
                self.apply_translation(host, row, remaining, false);
            }
            self.animations.remove(&row);
            host.restore_row_layers(row);
        }
    }

    /// Drops all engine state for one recycled row. Its animation, if any,
    /// is force-completed first.
    pub fn forget_row(&mut self, host: &mut dyn RowHost, row: RowId) {
        if let Some(mut animation) = self.animations.remove(&row) {
            let remaining = animation.force_finish();
            if remaining != 0.0 {
                self.apply_translation(host, row, remaining, false);
            }
            host.restore_row_layers(row);
        }
        self.registry.leave(row);
        if self.registry.dragged_row() == Some(row) {
            self.registry.clear_dragged();
        }
        self.metrics.remove(&row);
    }

    /// Wholesale teardown of the side tables and registry.
    pub fn clear(&mut self) {
        self.metrics.clear();
        self.animations.clear();
        self.registry.clear_all();
    }

    fn cancel_animation(&mut self, host: &mut dyn RowHost, row: RowId) {
        if self.animations.remove(&row).is_some() {
            host.restore_row_layers(row);
        }
    }

    /// Shared translation path for drags, jumps, and animation steps.
    ///
    /// Writes the new translation to every content child, accumulates the
    /// parallax offsets of the menu entries after the first, re-evaluates
    /// opened-set membership against the 5% threshold, and pins/marks the
    /// exact rest states.
    fn apply_translation(&mut self, host: &mut dyn RowHost, row: RowId, dx: f32, clamp: bool) {
        let (total_width, entry_widths) = match self.metrics.get(&row) {
            Some(metrics) => (metrics.total_width, metrics.entry_widths.clone()),
            None => return,
        };
        let sign = open_sign(host.layout_direction(row));
        let extreme = sign * total_width;
        let current = host.row_translation(row);

        let mut new_tx = current + dx;
        if clamp {
            new_tx = if sign < 0.0 {
                new_tx.clamp(extreme, 0.0)
            } else {
                new_tx.clamp(0.0, extreme)
            };
        }
        if (new_tx - extreme).abs() <= BOUNDARY_SNAP_EPSILON {
            new_tx = extreme;
        } else if new_tx.abs() <= BOUNDARY_SNAP_EPSILON {
            new_tx = 0.0;
        }

        let effective_dx = new_tx - current;
        if effective_dx == 0.0 {
            return;
        }

        if new_tx.abs() > total_width * OPENED_THRESHOLD_FRACTION {
            self.registry.enter(row);
        } else {
            self.registry.leave(row);
        }
        if new_tx == extreme {
            self.registry.mark_fully_open(row);
        } else {
            self.registry.clear_fully_open(row);
        }

        host.set_row_translation(row, new_tx);

        let mut entry_dx = 0.0;
        for entry in 1..entry_widths.len() {
            entry_dx -= effective_dx * entry_widths[entry - 1] / total_width;
            let offset = host.menu_entry_offset(row, entry) + entry_dx;
            host.set_menu_entry_offset(row, entry, offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use slidemenu_foundation::{LayoutDirection, RowHost, RowId, TranslationEngine};
    use slidemenu_graphics::Rect;
    use slidemenu_testing::TestHost;

    fn engine_with_row(widths: Vec<f32>) -> (TranslationEngine, TestHost, RowId) {
        let mut host = TestHost::new();
        let row = host.add_row(Rect::new(0.0, 0.0, 360.0, 80.0), Some(widths));
        let mut engine = TranslationEngine::new();
        assert!(engine.resolve_and_cache(&host, row));
        (engine, host, row)
    }

    #[test]
    fn translation_is_clamped_to_menu_width() {
        let (mut engine, mut host, row) = engine_with_row(vec![80.0, 120.0]);
        for dx in [-80.0, -80.0, -80.0, -500.0] {
            engine.apply_delta(&mut host, row, dx);
            assert!(host.row_translation(row).abs() <= 200.0);
        }
        assert_eq!(host.row_translation(row), -200.0);
        // And back past neutral clamps at zero.
        engine.apply_delta(&mut host, row, 1_000.0);
        assert_eq!(host.row_translation(row), 0.0);
    }

    #[test]
    fn rtl_translation_clamps_in_positive_range() {
        let (mut engine, mut host, row) = engine_with_row(vec![75.0, 75.0]);
        host.set_layout_direction(row, LayoutDirection::Rtl);
        engine.apply_delta(&mut host, row, 400.0);
        assert_eq!(host.row_translation(row), 150.0);
        engine.apply_delta(&mut host, row, -400.0);
        assert_eq!(host.row_translation(row), 0.0);
    }

    #[test]
    fn opened_membership_follows_five_percent_threshold() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        // 5% of 200 is 10; at 8 the row is not opened.
        engine.apply_delta(&mut host, row, -8.0);
        assert!(!engine.registry().is_opened(row));
        engine.apply_delta(&mut host, row, -4.0);
        assert!(engine.registry().is_opened(row));
        // Crossing back inward leaves the set again.
        engine.apply_delta(&mut host, row, 4.0);
        assert!(!engine.registry().is_opened(row));
    }

    #[test]
    fn fully_open_marked_exactly_at_extreme() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.apply_delta(&mut host, row, -199.0);
        assert_eq!(engine.registry().fully_open_row(), None);
        engine.apply_delta(&mut host, row, -1.0);
        assert_eq!(host.row_translation(row), -200.0);
        assert_eq!(engine.registry().fully_open_row(), Some(row));
        assert!(engine.registry().is_opened(row));
        // Dragging off the boundary clears the mark but not membership.
        engine.apply_delta(&mut host, row, 30.0);
        assert_eq!(engine.registry().fully_open_row(), None);
        assert!(engine.registry().is_opened(row));
    }

    #[test]
    fn parallax_staggers_entries_by_width_share() {
        let (mut engine, mut host, row) = engine_with_row(vec![80.0, 120.0]);
        engine.apply_delta(&mut host, row, -100.0);
        // First entry carries no extra offset; the second lags by the first
        // entry's width share of the travelled delta.
        assert_eq!(host.menu_entry_offset(row, 0), 0.0);
        assert_eq!(host.menu_entry_offset(row, 1), 40.0);
        // Offsets accumulate frame over frame.
        engine.apply_delta(&mut host, row, -50.0);
        assert_eq!(host.menu_entry_offset(row, 1), 60.0);
    }

    #[test]
    fn replacing_an_animation_keeps_translation_continuous() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.smooth_translate_to(&mut host, row, -200.0, 500);
        engine.on_frame(&mut host, 0);
        engine.on_frame(&mut host, 160);
        let mid_flight = host.row_translation(row);
        assert!(mid_flight < 0.0 && mid_flight > -200.0);
        // Replace the opening animation with a closing one; the row must not
        // jump at the moment of replacement.
        engine.smooth_translate_to(&mut host, row, 0.0, 500);
        assert_eq!(host.row_translation(row), mid_flight);
        let mut now = 160;
        while engine.has_pending_animations() {
            now += 16;
            engine.on_frame(&mut host, now);
        }
        assert_eq!(host.row_translation(row), 0.0);
    }

    #[test]
    fn direct_translation_cancels_pending_animation() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.smooth_translate_to(&mut host, row, -200.0, 500);
        engine.on_frame(&mut host, 0);
        engine.on_frame(&mut host, 64);
        assert!(engine.is_animating(row));
        engine.apply_delta(&mut host, row, -10.0);
        assert!(!engine.is_animating(row));
        assert_eq!(host.layer_promotions(row), host.layer_restores(row));
    }

    #[test]
    fn zero_duration_translates_without_animation() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.smooth_translate_to(&mut host, row, -200.0, 0);
        assert_eq!(host.row_translation(row), -200.0);
        assert!(!engine.has_pending_animations());
        assert_eq!(engine.registry().fully_open_row(), Some(row));
    }

    #[test]
    fn animated_open_lands_exactly_and_marks_fully_open() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.smooth_translate_to(&mut host, row, -200.0, 500);
        let mut now = 0;
        while engine.has_pending_animations() {
            engine.on_frame(&mut host, now);
            now += 16;
        }
        assert_eq!(host.row_translation(row), -200.0);
        assert_eq!(engine.registry().fully_open_row(), Some(row));
        assert_eq!(host.layer_promotions(row), 1);
        assert_eq!(host.layer_restores(row), 1);
    }

    #[test]
    fn release_at_neutral_is_identity() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.release(&mut host, row, 500);
        assert_eq!(host.row_translation(row), 0.0);
        assert!(!engine.has_pending_animations());
        assert!(!engine.registry().has_opened_rows());
    }

    #[test]
    fn force_finish_lands_on_targets() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.smooth_translate_to(&mut host, row, -200.0, 500);
        engine.on_frame(&mut host, 0);
        engine.on_frame(&mut host, 100);
        engine.force_finish_all(&mut host);
        assert!(!engine.has_pending_animations());
        assert_eq!(host.row_translation(row), -200.0);
        assert_eq!(host.layer_restores(row), 1);
    }

    #[test]
    fn forget_row_drops_all_state() {
        let (mut engine, mut host, row) = engine_with_row(vec![100.0, 100.0]);
        engine.smooth_translate_to(&mut host, row, -200.0, 500);
        engine.on_frame(&mut host, 0);
        engine.on_frame(&mut host, 100);
        engine.forget_row(&mut host, row);
        assert!(!engine.has_pending_animations());
        assert!(engine.metrics(row).is_none());
        assert!(!engine.registry().has_opened_rows());
        assert_eq!(host.row_translation(row), -200.0);
    }
}
