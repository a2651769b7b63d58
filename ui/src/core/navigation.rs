//! Slideshow navigation over the fixed scene order.
//!
//! The state is a single index into [`SCENE_ORDER`]; previous/next are
//! no-ops at the boundaries and direct scene selection snaps the index to
//! that scene's position, so sequential and manual navigation stay
//! consistent. Control enablement is derived, never stored.

use super::scene::{SceneId, SCENE_ORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
}

impl NavigationState {
    /// Starts on the aggregate scene, matching the initial page load.
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn scene(&self) -> SceneId {
        SCENE_ORDER[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    /// Jump directly to a scene index. Out-of-range requests are ignored
    /// so `current` always indexes a valid descriptor.
    pub fn go_to(&mut self, index: usize) {
        if index < SCENE_ORDER.len() {
            self.current = index;
        }
    }

    /// Select a scene directly (scene-button click).
    pub fn select(&mut self, scene: SceneId) {
        self.current = scene.position();
    }

    pub fn next(&mut self) {
        if !self.next_disabled() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if !self.previous_disabled() {
            self.current -= 1;
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current == SCENE_ORDER.len() - 1
    }

    pub fn is_active(&self, scene: SceneId) -> bool {
        self.scene() == scene
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_aggregate_scene_with_previous_disabled() {
        let nav = NavigationState::new();
        assert_eq!(nav.scene(), SceneId::All);
        assert!(nav.previous_disabled());
        assert!(!nav.next_disabled());
    }

    #[test]
    fn walks_forward_through_the_whole_deck() {
        let mut nav = NavigationState::new();
        let mut seen = vec![nav.scene()];
        while !nav.next_disabled() {
            nav.next();
            seen.push(nav.scene());
        }
        assert_eq!(seen, SCENE_ORDER.to_vec());
        assert!(nav.next_disabled());
    }

    #[test]
    fn next_and_previous_are_noops_at_the_boundaries() {
        let mut nav = NavigationState::new();
        nav.previous();
        assert_eq!(nav.index(), 0);

        nav.go_to(SCENE_ORDER.len() - 1);
        nav.next();
        assert_eq!(nav.index(), SCENE_ORDER.len() - 1);
    }

    #[test]
    fn direct_selection_keeps_sequential_navigation_consistent() {
        let mut nav = NavigationState::new();
        nav.select(SceneId::Storage);
        assert_eq!(nav.index(), 3);
        nav.next();
        assert_eq!(nav.scene(), SceneId::Camera);
    }

    #[test]
    fn out_of_range_go_to_is_ignored() {
        let mut nav = NavigationState::new();
        nav.go_to(99);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn exactly_one_scene_is_active_in_every_reachable_state() {
        let mut nav = NavigationState::new();
        for _ in 0..SCENE_ORDER.len() {
            let active = SCENE_ORDER.iter().filter(|s| nav.is_active(**s)).count();
            assert_eq!(active, 1);
            assert_eq!(nav.previous_disabled(), nav.index() == 0);
            assert_eq!(nav.next_disabled(), nav.index() == SCENE_ORDER.len() - 1);
            nav.next();
        }
    }
}
