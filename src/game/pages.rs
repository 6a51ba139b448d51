// game/pages.rs

use bevy::prelude::Resource;

/// Resource tracking which lesson slide is showing.
///
/// Navigation clamps at both ends: backing off the first page and
/// advancing past the last page are no-ops (the play button handles
/// leaving the screen).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTracker {
    current: usize,
    total: usize,
}

impl Default for PageTracker {
    fn default() -> Self {
        PageTracker::new(5)
    }
}

impl PageTracker {
    pub fn new(total: usize) -> Self {
        assert!(total > 0, "a slideshow needs at least one page");
        PageTracker { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn on_first_page(&self) -> bool {
        self.current == 0
    }

    pub fn on_last_page(&self) -> bool {
        self.current == self.total - 1
    }

    /// Advance one page. Returns true if the page actually changed.
    pub fn next(&mut self) -> bool {
        if self.on_last_page() {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Go back one page. Returns true if the page actually changed.
    pub fn back(&mut self) -> bool {
        if self.on_first_page() {
            false
        } else {
            self.current -= 1;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let pages = PageTracker::new(5);
        assert_eq!(pages.current(), 0);
        assert!(pages.on_first_page());
        assert!(!pages.on_last_page());
    }

    #[test]
    fn next_clamps_at_last_page() {
        let mut pages = PageTracker::new(5);
        for expected in 1..5 {
            assert!(pages.next());
            assert_eq!(pages.current(), expected);
        }
        assert!(pages.on_last_page());

        // Forward from the last page stays put.
        assert!(!pages.next());
        assert_eq!(pages.current(), 4);
    }

    #[test]
    fn back_clamps_at_first_page() {
        let mut pages = PageTracker::new(5);
        assert!(!pages.back());
        assert_eq!(pages.current(), 0);

        pages.next();
        pages.next();
        assert!(pages.back());
        assert_eq!(pages.current(), 1);
    }

    #[test]
    fn forward_then_back_round_trips_every_page() {
        let mut pages = PageTracker::new(5);
        for p in 0..5 {
            assert_eq!(pages.current(), p.min(4));
            pages.next();
        }
        for p in (0..5).rev() {
            assert_eq!(pages.current(), p.max(0));
            pages.back();
        }
        assert_eq!(pages.current(), 0);
    }

    #[test]
    fn single_page_tracker_is_both_first_and_last() {
        let mut pages = PageTracker::new(1);
        assert!(pages.on_first_page());
        assert!(pages.on_last_page());
        assert!(!pages.next());
        assert!(!pages.back());
    }
}
