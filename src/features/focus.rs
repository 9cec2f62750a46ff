//! Keyboard focus regions
//!
//! Arrow and digit keys only reach the component that owns focus, so two
//! carousels on one page never react to the same key press.

use super::Action;

/// A page component that can own keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRegion {
    /// Owns focus when the page mounts
    #[default]
    HeroCarousel,
    CategoryStrip,
    VehicleSelector,
    HeaderSearch,
}

/// What a scoped key press means for the focused region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCommand {
    CarouselPrevious,
    CarouselNext,
    CarouselGoTo(u32),
    StripLeft,
    StripRight,
}

impl FocusRegion {
    /// Route a bound navigation action to this region
    pub fn route_action(self, action: Action) -> Option<RegionCommand> {
        match (self, action) {
            (FocusRegion::HeroCarousel, Action::PreviousItem) => {
                Some(RegionCommand::CarouselPrevious)
            }
            (FocusRegion::HeroCarousel, Action::NextItem) => Some(RegionCommand::CarouselNext),
            (FocusRegion::CategoryStrip, Action::PreviousItem) => Some(RegionCommand::StripLeft),
            (FocusRegion::CategoryStrip, Action::NextItem) => Some(RegionCommand::StripRight),
            _ => None,
        }
    }

    /// Route a slide digit (1-9) to this region
    pub fn route_digit(self, digit: u32) -> Option<RegionCommand> {
        match self {
            FocusRegion::HeroCarousel => Some(RegionCommand::CarouselGoTo(digit)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_owns_focus_by_default() {
        assert_eq!(FocusRegion::default(), FocusRegion::HeroCarousel);
    }

    #[test]
    fn test_arrows_follow_focus() {
        assert_eq!(
            FocusRegion::HeroCarousel.route_action(Action::NextItem),
            Some(RegionCommand::CarouselNext)
        );
        assert_eq!(
            FocusRegion::CategoryStrip.route_action(Action::PreviousItem),
            Some(RegionCommand::StripLeft)
        );
        assert_eq!(
            FocusRegion::VehicleSelector.route_action(Action::NextItem),
            None
        );
        assert_eq!(
            FocusRegion::HeaderSearch.route_action(Action::PreviousItem),
            None
        );
    }

    #[test]
    fn test_digits_only_reach_the_carousel() {
        assert_eq!(
            FocusRegion::HeroCarousel.route_digit(2),
            Some(RegionCommand::CarouselGoTo(2))
        );
        assert_eq!(FocusRegion::CategoryStrip.route_digit(2), None);
        assert_eq!(FocusRegion::HeaderSearch.route_digit(2), None);
    }

    #[test]
    fn test_global_actions_are_not_scoped() {
        for region in [
            FocusRegion::HeroCarousel,
            FocusRegion::CategoryStrip,
            FocusRegion::VehicleSelector,
            FocusRegion::HeaderSearch,
        ] {
            assert_eq!(region.route_action(Action::ToggleDarkMode), None);
        }
    }
}
