//! Slide carousel controller
//!
//! Owns the active slide index and the auto-advance timer of a rotating
//! carousel. The timer is an armed deadline: the app keeps a runtime tick
//! subscription alive only while [`CarouselController::is_armed`] returns
//! true, and every tick is checked against the deadline before it may
//! advance. A tick that arrives while paused, unmounted or early is dropped,
//! so a stale timer can never move a disposed controller.
//!
//! Every re-arm bumps an arm generation. The runtime subscription is keyed
//! on it, so a pause and resume handled in one batch still restarts the
//! tick stream at the new phase instead of reusing the old one.

use std::time::{Duration, Instant};

/// Default auto-advance cadence
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Runtime ticks may land a hair before the deadline we computed
const TICK_TOLERANCE: Duration = Duration::from_millis(50);

/// Direction of the last slide transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1.0 for forward, -1.0 for backward
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Carousel state machine
#[derive(Debug, Clone)]
pub struct CarouselController {
    slide_count: usize,
    active_index: usize,
    last_index: usize,
    direction: Direction,
    /// Paused by user interaction (pointer over the carousel)
    paused: bool,
    /// Auto-advance allowed by the app (reduce motion, window visibility)
    auto_advance: bool,
    mounted: bool,
    interval: Duration,
    /// Next auto-advance deadline, `None` whenever the timer is cancelled
    deadline: Option<Instant>,
    generation: u64,
}

impl CarouselController {
    /// Create an unmounted controller. Returns `None` for an empty carousel.
    pub fn new(slide_count: usize, interval: Duration) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }

        Some(Self {
            slide_count,
            active_index: 0,
            last_index: 0,
            direction: Direction::Forward,
            paused: false,
            auto_advance: true,
            mounted: false,
            interval,
            deadline: None,
            generation: 0,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Index that was visible before the last transition
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the auto-advance timer is currently armed
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Identity of the armed timer: its interval and arm generation.
    /// `None` while the timer is cancelled.
    pub fn timer(&self) -> Option<(Duration, u64)> {
        self.deadline.map(|_| (self.interval, self.generation))
    }

    /// "current / total" label for the live status region
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.active_index + 1, self.slide_count)
    }

    /// Advance to the next slide, wrapping to the first
    pub fn next(&mut self) {
        let target = (self.active_index + 1) % self.slide_count;
        self.transition(target, Direction::Forward);
    }

    /// Go back to the previous slide, wrapping to the last
    pub fn previous(&mut self) {
        let target = (self.active_index + self.slide_count - 1) % self.slide_count;
        self.transition(target, Direction::Backward);
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether the index was in range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }

        let direction = if index < self.active_index {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.transition(index, direction);
        true
    }

    /// Jump to the slide labelled by a 1-based digit key
    pub fn go_to_digit(&mut self, digit: u32) -> bool {
        match digit.checked_sub(1) {
            Some(index) => self.go_to(index as usize),
            None => false,
        }
    }

    /// Suspend auto-advance while the user interacts. Cancels the timer.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.deadline = None;
    }

    /// Leave the paused state and re-arm a full fresh interval
    pub fn resume(&mut self, now: Instant) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.rearm(now);
    }

    /// Start the controller (page mounted). Arms the timer unless paused.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.rearm(now);
    }

    /// Tear the controller down (page unmounted). Cancels the timer.
    ///
    /// The slide index and the pointer pause survive, so a later `mount`
    /// resumes where it left and stays paused under a resting pointer.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.deadline = None;
    }

    /// Allow or forbid auto-advance independently of user pauses
    pub fn set_auto_advance(&mut self, enabled: bool, now: Instant) {
        if self.auto_advance == enabled {
            return;
        }
        self.auto_advance = enabled;
        self.rearm(now);
    }

    /// Handle an auto-advance tick. Returns whether the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now + TICK_TOLERANCE < deadline {
            return false;
        }

        self.next();

        let mut next_deadline = deadline + self.interval;
        if next_deadline <= now {
            // Fell behind (suspended process); restart the cadence from now
            next_deadline = now + self.interval;
        }
        self.deadline = Some(next_deadline);
        true
    }

    fn transition(&mut self, target: usize, direction: Direction) {
        self.last_index = self.active_index;
        self.active_index = target;
        self.direction = direction;
    }

    fn rearm(&mut self, now: Instant) {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = if self.mounted && self.auto_advance && !self.paused {
            Some(now + self.interval)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(count: usize, now: Instant) -> CarouselController {
        let mut carousel = CarouselController::new(count, DEFAULT_INTERVAL).unwrap();
        carousel.mount(now);
        carousel
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert!(CarouselController::new(0, DEFAULT_INTERVAL).is_none());
    }

    #[test]
    fn next_wraps_forward() {
        let mut carousel = mounted(3, Instant::now());
        carousel.next();
        assert_eq!(carousel.active_index(), 1);
        carousel.next();
        assert_eq!(carousel.active_index(), 2);
        carousel.next();
        assert_eq!(carousel.active_index(), 0, "third next must wrap to 0");
    }

    #[test]
    fn previous_wraps_backward() {
        let mut carousel = mounted(3, Instant::now());
        carousel.previous();
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.direction(), Direction::Backward);
        assert_eq!(carousel.last_index(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = mounted(3, Instant::now());
        carousel.next();
        assert!(!carousel.go_to(3));
        assert!(!carousel.go_to(usize::MAX));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.last_index(), 0, "ignored jump must not touch history");
    }

    #[test]
    fn digit_keys_are_one_based() {
        let mut carousel = mounted(3, Instant::now());
        assert!(carousel.go_to_digit(3));
        assert_eq!(carousel.active_index(), 2);
        assert!(!carousel.go_to_digit(0));
        assert!(!carousel.go_to_digit(4));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut carousel = mounted(3, Instant::now());
        assert_eq!(carousel.position_label(), "1 / 3");
        carousel.previous();
        assert_eq!(carousel.position_label(), "3 / 3");
    }

    mod property_index_bounds {
        use super::*;

        #[test]
        fn next_stays_in_range_for_any_count() {
            for count in 1..=12 {
                let mut carousel = mounted(count, Instant::now());
                for _ in 0..(count * 3 + 1) {
                    carousel.next();
                    assert!(
                        carousel.active_index() < count,
                        "index {} escaped range for count {}",
                        carousel.active_index(),
                        count
                    );
                }
            }
        }

        #[test]
        fn next_then_previous_restores_index() {
            for count in 1..=8 {
                for start in 0..count {
                    let mut carousel = mounted(count, Instant::now());
                    assert!(carousel.go_to(start));
                    carousel.next();
                    carousel.previous();
                    assert_eq!(
                        carousel.active_index(),
                        start,
                        "count={}, start={}",
                        count,
                        start
                    );
                }
            }
        }

        #[test]
        fn single_slide_always_stays_at_zero() {
            let mut carousel = mounted(1, Instant::now());
            carousel.next();
            carousel.previous();
            assert_eq!(carousel.active_index(), 0);
        }
    }

    mod property_auto_advance {
        use super::*;

        #[test]
        fn mount_arms_a_full_interval() {
            let start = Instant::now();
            let carousel = mounted(3, start);
            assert_eq!(carousel.deadline(), Some(start + DEFAULT_INTERVAL));
        }

        #[test]
        fn unmounted_controller_is_not_armed() {
            let carousel = CarouselController::new(3, DEFAULT_INTERVAL).unwrap();
            assert!(!carousel.is_armed());
        }

        #[test]
        fn tick_before_deadline_is_ignored() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            assert!(!carousel.tick(start + ms(4000)));
            assert_eq!(carousel.active_index(), 0);
        }

        #[test]
        fn tick_at_deadline_advances_once() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            assert!(carousel.tick(start + ms(5000)));
            assert_eq!(carousel.active_index(), 1);
            // Duplicate delivery of the same tick must not double-advance
            assert!(!carousel.tick(start + ms(5000)));
            assert_eq!(carousel.active_index(), 1);
        }

        #[test]
        fn slightly_early_tick_is_accepted() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            assert!(carousel.tick(start + ms(4990)));
            assert_eq!(carousel.deadline(), Some(start + ms(10000)));
        }

        #[test]
        fn cadence_does_not_drift() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            assert!(carousel.tick(start + ms(5030)));
            assert_eq!(carousel.deadline(), Some(start + ms(10000)));
        }

        #[test]
        fn late_tick_restarts_cadence_from_now() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            let late = start + ms(60_000);
            assert!(carousel.tick(late));
            assert_eq!(carousel.active_index(), 1, "a late tick advances only once");
            assert_eq!(carousel.deadline(), Some(late + DEFAULT_INTERVAL));
        }

        #[test]
        fn pause_blocks_advance_until_resume() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.pause();
            assert!(!carousel.is_armed(), "pause must cancel the timer");

            assert!(!carousel.tick(start + ms(5000)));
            assert!(!carousel.tick(start + ms(10000)));
            assert_eq!(carousel.active_index(), 0);

            let resumed_at = start + ms(10000);
            carousel.resume(resumed_at);
            assert_eq!(carousel.deadline(), Some(resumed_at + DEFAULT_INTERVAL));
            assert!(carousel.tick(resumed_at + ms(5000)));
            assert_eq!(carousel.active_index(), 1, "exactly one advance after resume");
        }

        #[test]
        fn resume_does_not_carry_over_elapsed_time() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.pause();
            let resumed_at = start + ms(4900);
            carousel.resume(resumed_at);
            assert!(!carousel.tick(start + ms(5000)));
            assert!(carousel.tick(resumed_at + ms(5000)));
        }

        #[test]
        fn resume_without_pause_keeps_deadline() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.resume(start + ms(3000));
            assert_eq!(carousel.deadline(), Some(start + DEFAULT_INTERVAL));
        }

        #[test]
        fn manual_navigation_ignores_pause_and_keeps_timer() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.next();
            assert_eq!(carousel.deadline(), Some(start + DEFAULT_INTERVAL));

            carousel.pause();
            carousel.next();
            carousel.previous();
            carousel.previous();
            assert_eq!(carousel.active_index(), 0);
            assert!(carousel.is_paused());
        }

        #[test]
        fn unmount_cancels_timer_and_drops_stale_ticks() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.unmount();
            assert!(!carousel.is_armed());
            assert!(!carousel.tick(start + ms(5000)));
            assert_eq!(carousel.active_index(), 0);
        }

        #[test]
        fn remount_keeps_index_and_rearms() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.next();
            carousel.pause();
            carousel.unmount();

            let back = start + ms(20_000);
            carousel.mount(back);
            assert_eq!(carousel.active_index(), 1);
            assert!(
                carousel.is_paused(),
                "pointer pause must survive a minimize while the cursor rests on the hero"
            );
            assert!(!carousel.is_armed());

            carousel.resume(back + ms(500));
            assert_eq!(carousel.deadline(), Some(back + ms(5500)));
        }

        #[test]
        fn remount_without_pause_rearms() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.unmount();

            let back = start + ms(20_000);
            carousel.mount(back);
            assert_eq!(carousel.deadline(), Some(back + DEFAULT_INTERVAL));
        }

        #[test]
        fn every_rearm_gets_a_new_timer_identity() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            let before = carousel.timer();
            assert!(before.is_some());

            carousel.pause();
            assert_eq!(carousel.timer(), None);
            carousel.resume(start + ms(100));
            let after = carousel.timer();
            assert!(after.is_some());
            assert_ne!(before, after, "resume must restart the tick stream");
        }

        #[test]
        fn ticks_keep_the_timer_identity() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            let before = carousel.timer();
            assert!(carousel.tick(start + DEFAULT_INTERVAL));
            assert_eq!(carousel.timer(), before);
        }

        #[test]
        fn disabling_auto_advance_survives_pointer_resume() {
            let start = Instant::now();
            let mut carousel = mounted(3, start);
            carousel.set_auto_advance(false, start);
            carousel.pause();
            carousel.resume(start + ms(1000));
            assert!(!carousel.is_armed());

            carousel.set_auto_advance(true, start + ms(2000));
            assert_eq!(carousel.deadline(), Some(start + ms(7000)));
        }
    }
}
