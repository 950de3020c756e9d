//! Reveal animation state machine
//!
//! Drives proficiency bars from 0% to their target width when the enclosing
//! panel opens, with a fixed per-index stagger so bars cascade instead of
//! jumping in together. Every transition takes an explicit `now`, so the
//! machine can be tested without a render loop and is not tied to any
//! particular frontend's visibility callback.
//!
//! Per bar: `Collapsed -> Revealing` when the panel opens (offset by the
//! bar's stagger delay), `Revealing -> Revealed` once the transition
//! duration elapses, and any phase snaps back to `Collapsed` the moment the
//! panel closes. Re-opening replays the animation from zero.

use std::time::{Duration, Instant};

use crate::proficiency::Level;

/// Default transition duration for a single bar.
pub const DEFAULT_REVEAL: Duration = Duration::from_millis(700);

/// Default per-index stagger between bars revealed together.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

/// Phase of one bar's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Hidden panel, or open panel still inside this bar's stagger delay.
    Collapsed,
    /// Transition running; width grows toward the target.
    Revealing,
    /// Transition finished; width equals the target.
    Revealed,
}

/// Stagger schedule: maps an item's position to its start-time offset.
///
/// The delay is purely a function of index. It is a start-time offset, not
/// sequential chaining: bar N does not wait for bar N-1 to finish.
#[derive(Debug, Clone, Copy)]
pub struct StaggerSchedule {
    step: Duration,
    /// Items per group for grouped listings; 0 means a flat listing.
    stride: usize,
}

impl StaggerSchedule {
    /// Flat listing: item `i` starts after `i * step`.
    pub fn flat(step: Duration) -> Self {
        Self { step, stride: 0 }
    }

    /// Grouped listing: the item at `(group, index)` starts after
    /// `(group * stride + index) * step`. `stride` is the size of the
    /// largest group, so delays keep increasing across group boundaries.
    pub fn grouped(step: Duration, stride: usize) -> Self {
        Self { step, stride }
    }

    /// Delay for a flat index.
    pub fn delay(&self, index: usize) -> Duration {
        self.step * index as u32
    }

    /// Delay for a grouped position.
    pub fn group_delay(&self, group_index: usize, item_index: usize) -> Duration {
        self.step * (group_index * self.stride + item_index) as u32
    }
}

/// Finite state machine for a single proficiency bar.
#[derive(Debug, Clone)]
pub struct BarReveal {
    /// Target width in percent, already clamped via [`Level`].
    target_percent: u8,
    /// Stagger offset from the panel's open instant.
    delay: Duration,
    /// Transition duration once the delay has elapsed.
    duration: Duration,
    /// Set when the panel opened; `None` while the panel is hidden.
    opened_at: Option<Instant>,
}

impl BarReveal {
    pub fn new(level: Level, delay: Duration, duration: Duration) -> Self {
        Self {
            target_percent: level.width_percent(),
            delay,
            duration,
            opened_at: None,
        }
    }

    /// Target width at the Revealed phase.
    pub fn target_percent(&self) -> u8 {
        self.target_percent
    }

    /// Stagger offset assigned to this bar.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Panel visibility flipped false -> true.
    pub fn open(&mut self, now: Instant) {
        if self.opened_at.is_none() {
            self.opened_at = Some(now);
        }
    }

    /// Panel visibility flipped true -> false. Width snaps to zero and no
    /// queued transition fires afterwards, even mid-animation.
    pub fn close(&mut self) {
        self.opened_at = None;
    }

    /// Instant at which this bar's own transition starts.
    pub fn starts_at(&self) -> Option<Instant> {
        self.opened_at.map(|t| t + self.delay)
    }

    /// Current phase at `now`.
    pub fn phase(&self, now: Instant) -> RevealPhase {
        let Some(opened_at) = self.opened_at else {
            return RevealPhase::Collapsed;
        };
        let start = opened_at + self.delay;
        if now < start {
            RevealPhase::Collapsed
        } else if now < start + self.duration {
            RevealPhase::Revealing
        } else {
            RevealPhase::Revealed
        }
    }

    /// Rendered width in percent at `now`, following a cubic ease-out over
    /// the transition window. Exactly 0 while collapsed and exactly the
    /// target once revealed.
    pub fn width_percent(&self, now: Instant) -> f32 {
        let Some(opened_at) = self.opened_at else {
            return 0.0;
        };
        let start = opened_at + self.delay;
        if now < start {
            0.0
        } else if now >= start + self.duration {
            self.target_percent as f32
        } else {
            let elapsed = now.duration_since(start).as_secs_f32();
            let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
            self.target_percent as f32 * ease_out(t)
        }
    }
}

/// Cubic ease-out: fast start, settling into the target.
fn ease_out(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// A panel's worth of bars sharing one visibility flag.
///
/// Owns the open/closed state the way each modal in the page does: flipping
/// it fans out to every bar, preserving input order.
#[derive(Debug, Clone)]
pub struct PanelReveal {
    bars: Vec<BarReveal>,
    visible: bool,
}

impl PanelReveal {
    /// Build from bars whose delays were computed elsewhere (e.g. from a
    /// display list that already applied a grouped schedule).
    pub fn from_bars(bars: Vec<BarReveal>) -> Self {
        Self { bars, visible: false }
    }

    /// Build from a flat listing: bar `i` gets delay `i * step`.
    pub fn flat(levels: &[Level], step: Duration, duration: Duration) -> Self {
        let schedule = StaggerSchedule::flat(step);
        let bars = levels
            .iter()
            .enumerate()
            .map(|(i, level)| BarReveal::new(*level, schedule.delay(i), duration))
            .collect();
        Self { bars, visible: false }
    }

    /// Build from a grouped listing: the bar at `(g, i)` gets delay
    /// `(g * stride + i) * step`, stride being the largest group's size.
    pub fn grouped(groups: &[Vec<Level>], step: Duration, duration: Duration) -> Self {
        let stride = groups.iter().map(Vec::len).max().unwrap_or(0);
        let schedule = StaggerSchedule::grouped(step, stride);
        let mut bars = Vec::new();
        for (g, group) in groups.iter().enumerate() {
            for (i, level) in group.iter().enumerate() {
                bars.push(BarReveal::new(*level, schedule.group_delay(g, i), duration));
            }
        }
        Self { bars, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn bars(&self) -> &[BarReveal] {
        &self.bars
    }

    /// Flip the visibility flag. Opening starts every bar's clock at `now`;
    /// closing snaps everything back to zero. Repeat flips with the same
    /// value are ignored, matching a boolean "open" prop.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            for bar in &mut self.bars {
                bar.open(now);
            }
        } else {
            for bar in &mut self.bars {
                bar.close();
            }
        }
    }

    /// True once every bar has reached the Revealed phase.
    pub fn fully_revealed(&self, now: Instant) -> bool {
        self.visible && self.bars.iter().all(|b| b.phase(now) == RevealPhase::Revealed)
    }

    /// Instant at which the last bar finishes, if the panel is open.
    pub fn settles_at(&self) -> Option<Instant> {
        self.bars
            .iter()
            .filter_map(|b| b.starts_at().map(|s| s + b.duration))
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(raw: i64) -> Level {
        Level::new(raw)
    }

    #[test]
    fn test_flat_stagger_is_index_times_step() {
        let schedule = StaggerSchedule::flat(Duration::from_millis(100));
        assert_eq!(schedule.delay(0), Duration::ZERO);
        assert_eq!(schedule.delay(1), Duration::from_millis(100));
        assert_eq!(schedule.delay(5), Duration::from_millis(500));
    }

    #[test]
    fn test_grouped_stagger_spans_groups() {
        // stride 4: second group's first item lands after 4 steps
        let schedule = StaggerSchedule::grouped(Duration::from_millis(100), 4);
        assert_eq!(schedule.group_delay(0, 0), Duration::ZERO);
        assert_eq!(schedule.group_delay(0, 2), Duration::from_millis(200));
        assert_eq!(schedule.group_delay(1, 0), Duration::from_millis(400));
        assert_eq!(schedule.group_delay(1, 3), Duration::from_millis(700));
    }

    #[test]
    fn test_bar_lifecycle() {
        let now = Instant::now();
        let mut bar = BarReveal::new(level(9), Duration::from_millis(100), DEFAULT_REVEAL);

        assert_eq!(bar.phase(now), RevealPhase::Collapsed);
        assert_eq!(bar.width_percent(now), 0.0);

        bar.open(now);
        // still inside the stagger delay
        assert_eq!(bar.phase(now + Duration::from_millis(50)), RevealPhase::Collapsed);
        // mid-transition
        assert_eq!(bar.phase(now + Duration::from_millis(400)), RevealPhase::Revealing);
        // settled
        let settled = now + Duration::from_millis(900);
        assert_eq!(bar.phase(settled), RevealPhase::Revealed);
        assert_eq!(bar.width_percent(settled), 90.0);
    }

    #[test]
    fn test_width_monotonic_while_revealing() {
        let now = Instant::now();
        let mut bar = BarReveal::new(level(10), Duration::ZERO, DEFAULT_REVEAL);
        bar.open(now);

        let mut last = -1.0f32;
        for ms in (0..=700).step_by(50) {
            let w = bar.width_percent(now + Duration::from_millis(ms));
            assert!(w >= last, "width regressed at {}ms: {} < {}", ms, w, last);
            assert!(w <= 100.0);
            last = w;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_close_mid_animation_snaps_to_zero() {
        let now = Instant::now();
        let mut bar = BarReveal::new(level(8), Duration::ZERO, DEFAULT_REVEAL);
        bar.open(now);

        let mid = now + Duration::from_millis(300);
        assert_eq!(bar.phase(mid), RevealPhase::Revealing);

        bar.close();
        assert_eq!(bar.phase(mid), RevealPhase::Collapsed);
        assert_eq!(bar.width_percent(mid), 0.0);
        // nothing fires later either
        let later = now + Duration::from_secs(10);
        assert_eq!(bar.phase(later), RevealPhase::Collapsed);
        assert_eq!(bar.width_percent(later), 0.0);
    }

    #[test]
    fn test_reopen_replays_from_zero() {
        let start = Instant::now();
        let mut bar = BarReveal::new(level(7), Duration::ZERO, DEFAULT_REVEAL);

        for cycle in 0..3 {
            let opened = start + Duration::from_secs(cycle * 5);
            bar.open(opened);
            assert_eq!(bar.width_percent(opened), 0.0, "cycle {} starts at zero", cycle);
            let settled = opened + Duration::from_secs(2);
            assert_eq!(bar.phase(settled), RevealPhase::Revealed);
            assert_eq!(bar.width_percent(settled), 70.0);
            bar.close();
            assert_eq!(bar.width_percent(settled), 0.0);
        }
    }

    #[test]
    fn test_panel_flat_delays_match_input_order() {
        let now = Instant::now();
        let levels: Vec<Level> = [9, 8, 7, 8, 7, 7].iter().map(|&l| level(l)).collect();
        let mut panel = PanelReveal::flat(&levels, DEFAULT_STAGGER, DEFAULT_REVEAL);
        panel.set_visible(true, now);

        for (i, bar) in panel.bars().iter().enumerate() {
            assert_eq!(bar.delay(), DEFAULT_STAGGER * i as u32);
            assert_eq!(bar.starts_at(), Some(now + DEFAULT_STAGGER * i as u32));
        }
        // order preserved: targets line up with the input sequence
        let targets: Vec<u8> = panel.bars().iter().map(|b| b.target_percent()).collect();
        assert_eq!(targets, vec![90, 80, 70, 80, 70, 70]);
    }

    #[test]
    fn test_panel_grouped_uses_largest_group_as_stride() {
        let now = Instant::now();
        let groups = vec![
            vec![level(9), level(9), level(7)],
            vec![level(7), level(7), level(7), level(7)],
        ];
        let mut panel = PanelReveal::grouped(&groups, DEFAULT_STAGGER, DEFAULT_REVEAL);
        panel.set_visible(true, now);

        // stride = 4, so group 1 item 0 starts at 4 * 100ms
        assert_eq!(panel.bars()[3].delay(), Duration::from_millis(400));
        assert_eq!(panel.bars()[6].delay(), Duration::from_millis(700));
    }

    #[test]
    fn test_panel_open_close_cycles_are_idempotent() {
        let start = Instant::now();
        let levels: Vec<Level> = [5, 9].iter().map(|&l| level(l)).collect();
        let mut panel = PanelReveal::flat(&levels, DEFAULT_STAGGER, DEFAULT_REVEAL);

        for cycle in 0u64..4 {
            let opened = start + Duration::from_secs(cycle * 10);
            panel.set_visible(true, opened);
            let settled = panel.settles_at().expect("open panel settles");
            assert!(panel.fully_revealed(settled));
            assert_eq!(panel.bars()[0].width_percent(settled), 50.0);
            assert_eq!(panel.bars()[1].width_percent(settled), 90.0);

            panel.set_visible(false, settled);
            assert!(!panel.fully_revealed(settled));
            for bar in panel.bars() {
                assert_eq!(bar.width_percent(settled), 0.0);
            }
        }
    }

    #[test]
    fn test_redundant_visibility_flips_ignored() {
        let now = Instant::now();
        let mut panel = PanelReveal::flat(&[level(6)], DEFAULT_STAGGER, DEFAULT_REVEAL);
        panel.set_visible(true, now);
        let first_start = panel.bars()[0].starts_at();
        // a second "open" must not restart the clock
        panel.set_visible(true, now + Duration::from_millis(300));
        assert_eq!(panel.bars()[0].starts_at(), first_start);
    }
}
