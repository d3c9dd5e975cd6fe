use std::collections::BTreeSet;

/// What the showcase displays for the current index
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// The image itself; `loaded` is false while it is still fetching
    Image { index: usize, loaded: bool },
    /// Fallback for an image that failed to load
    Placeholder { index: usize },
}

/// Display state of the rotating showcase.
///
/// Advances one image per tick and wraps after the last one. Load success and
/// failure are tracked per index; a failed image shows the placeholder for
/// the rest of the rotation's life, there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseRotation {
    len: usize,
    current: usize,
    loaded: BTreeSet<usize>,
    failed: BTreeSet<usize>,
}

impl ShowcaseRotation {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            loaded: BTreeSet::new(),
            failed: BTreeSet::new(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[allow(dead_code)]
    pub fn tick(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Advance by `ticks` interval ticks at once
    pub fn advance(&mut self, ticks: u64) {
        if self.len > 0 {
            let steps = (ticks % self.len as u64) as usize;
            self.current = (self.current + steps) % self.len;
        }
    }

    /// Jump to `index`; returns false and stays put when it is out of range
    #[allow(dead_code)]
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    #[allow(dead_code)]
    pub fn mark_loaded(&mut self, index: usize) {
        if index < self.len {
            self.loaded.insert(index);
        }
    }

    #[allow(dead_code)]
    pub fn mark_failed(&mut self, index: usize) {
        if index < self.len {
            self.failed.insert(index);
        }
    }

    /// `None` when the rotation has no images
    #[allow(dead_code)]
    pub fn current_slide(&self) -> Option<Slide> {
        if self.len == 0 {
            return None;
        }

        let index = self.current;
        if self.failed.contains(&index) {
            Some(Slide::Placeholder { index })
        } else {
            Some(Slide::Image {
                index,
                loaded: self.loaded.contains(&index),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps_after_last() {
        let mut rotation = ShowcaseRotation::new(4);
        let seen: Vec<usize> = (0..6)
            .map(|_| {
                rotation.tick();
                rotation.current()
            })
            .collect();

        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn test_advance_matches_ticks() {
        let mut ticked = ShowcaseRotation::new(4);
        for _ in 0..11 {
            ticked.tick();
        }

        let mut advanced = ShowcaseRotation::new(4);
        advanced.advance(11);

        assert_eq!(advanced.current(), ticked.current());
        assert_eq!(advanced.current(), 3);
    }

    #[test]
    fn test_select() {
        let mut rotation = ShowcaseRotation::new(4);
        assert!(rotation.select(2));
        assert_eq!(rotation.current(), 2);

        assert!(!rotation.select(4));
        assert_eq!(rotation.current(), 2);

        rotation.tick();
        assert_eq!(rotation.current(), 3);
    }

    #[test]
    fn test_slide_load_status() {
        let mut rotation = ShowcaseRotation::new(3);
        assert_eq!(
            rotation.current_slide(),
            Some(Slide::Image {
                index: 0,
                loaded: false
            })
        );

        rotation.mark_loaded(0);
        assert_eq!(
            rotation.current_slide(),
            Some(Slide::Image {
                index: 0,
                loaded: true
            })
        );

        rotation.mark_failed(1);
        rotation.tick();
        assert_eq!(
            rotation.current_slide(),
            Some(Slide::Placeholder { index: 1 })
        );

        // Failed stays failed for the whole rotation
        rotation.advance(3);
        assert_eq!(
            rotation.current_slide(),
            Some(Slide::Placeholder { index: 1 })
        );
    }

    #[test]
    fn test_empty_rotation() {
        let mut rotation = ShowcaseRotation::new(0);
        rotation.tick();
        rotation.advance(7);
        assert!(!rotation.select(0));
        assert_eq!(rotation.current(), 0);
        assert_eq!(rotation.current_slide(), None);
    }
}
