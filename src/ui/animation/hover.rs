//! Exclusive hover highlight using iced_anim
//!
//! Only one card can be under the pointer at a time, so the manager keeps
//! exactly two animations: the card fading in and the card fading out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Hover progress for a family of items keyed by `K`
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Move the highlight to `key`, or clear it with `None`
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // Whatever was highlighted starts fading from where it is now
        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            if self.fading_key.as_ref() == Some(&new_key) {
                self.fading_key = None;
            }
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Animated progress in `[0, 1]` for `key`
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    /// Progress without easing, for reduced motion
    pub fn settled_progress(&self, key: &K) -> f32 {
        if self.is_active(key) { 1.0 } else { 0.0 }
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Advance both animations; drops the fading key once it reached zero
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);

        if self.fading_key.is_some() && !self.fading_anim.is_animating() {
            self.fading_key = None;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_is_exclusive() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        assert_eq!(anims.progress(&1), 0.0);

        anims.set_hovered(Some(1));
        assert!(anims.is_active(&1));

        anims.set_hovered(Some(2));
        assert!(anims.is_active(&2));
        assert!(!anims.is_active(&1));
    }

    #[test]
    fn test_settled_progress() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        anims.set_hovered(Some(3));
        assert_eq!(anims.settled_progress(&3), 1.0);
        assert_eq!(anims.settled_progress(&4), 0.0);

        anims.set_hovered(None);
        assert_eq!(anims.settled_progress(&3), 0.0);
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        anims.set_hovered(Some(1));
        anims.tick(Instant::now() + Duration::from_millis(100));
        let progress = anims.progress(&1);
        assert!((0.0..=1.0).contains(&progress));
    }

    #[test]
    fn test_clear() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new();
        anims.set_hovered(Some(1));
        anims.clear();
        assert!(!anims.is_active(&1));
        assert!(!anims.is_animating());
    }
}
