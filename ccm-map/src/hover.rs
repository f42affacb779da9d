//! Hover debouncing by feature identity.
//!
//! Pointer-move events arrive for every pixel of movement. Only a change of
//! the hovered feature should rebuild the tooltip; moves within the same
//! feature's hit area are swallowed here.

use ccm_feed::FeatureId;

/// Which feature, if any, the pointer is currently over.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(FeatureId),
}

/// Owns the single mutable hover cell.
///
/// A hit yields the identity to show, if any; a leave always hides, so it
/// returns nothing.
///
/// | state         | event       | next          | emits      |
/// |---------------|-------------|---------------|------------|
/// | Idle          | hit(id)     | Hovering(id)  | show id    |
/// | Hovering(id)  | hit(id)     | Hovering(id)  | nothing    |
/// | Hovering(id)  | hit(id2)    | Hovering(id2) | show id2   |
/// | any           | leave       | Idle          | hide       |
/// | any           | reset       | Idle          | nothing    |
#[derive(Debug, Default, Clone)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Identity currently hovered, if any.
    pub fn hovered(&self) -> Option<FeatureId> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Hovering(id) => Some(id),
        }
    }

    /// Pointer moved over feature `id`. Returns the identity whose tooltip
    /// should be shown, or `None` while the same feature stays hovered.
    pub fn on_hit(&mut self, id: FeatureId) -> Option<FeatureId> {
        if self.state == HoverState::Hovering(id) {
            return None;
        }
        self.state = HoverState::Hovering(id);
        Some(id)
    }

    /// Pointer left the point layer; the tooltip is hidden unconditionally.
    pub fn on_leave(&mut self) {
        self.state = HoverState::Idle;
    }

    /// Dataset was replaced; forget the old identity without emitting.
    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_hits_debounced() {
        let mut tracker = HoverTracker::new();
        let shown: Vec<FeatureId> = [5, 5, 5, 7]
            .into_iter()
            .filter_map(|id| tracker.on_hit(FeatureId(id)))
            .collect();
        assert_eq!(shown, vec![FeatureId(5), FeatureId(7)]);
        tracker.on_leave();
        assert_eq!(tracker.state(), HoverState::Idle);
    }

    #[test]
    fn test_switching_back_emits_again() {
        let mut tracker = HoverTracker::new();
        assert!(tracker.on_hit(FeatureId(1)).is_some());
        assert!(tracker.on_hit(FeatureId(2)).is_some());
        assert_eq!(tracker.on_hit(FeatureId(1)), Some(FeatureId(1)));
        assert_eq!(tracker.hovered(), Some(FeatureId(1)));
    }

    #[test]
    fn test_leave_from_idle_stays_idle() {
        let mut tracker = HoverTracker::new();
        tracker.on_leave();
        assert_eq!(tracker.state(), HoverState::Idle);
    }

    #[test]
    fn test_hit_after_leave_shows_same_identity() {
        let mut tracker = HoverTracker::new();
        assert_eq!(tracker.on_hit(FeatureId(4)), Some(FeatureId(4)));
        tracker.on_leave();
        assert_eq!(tracker.on_hit(FeatureId(4)), Some(FeatureId(4)));
    }

    #[test]
    fn test_reset_forgets_identity_silently() {
        let mut tracker = HoverTracker::new();
        tracker.on_hit(FeatureId(3));
        tracker.reset();
        assert_eq!(tracker.hovered(), None);
        // The same identity from a new load is a fresh hover
        assert_eq!(tracker.on_hit(FeatureId(3)), Some(FeatureId(3)));
    }
}
