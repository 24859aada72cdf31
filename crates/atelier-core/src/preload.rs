//! Preload guard — remembers which gallery images were already requested.
//!
//! The gallery preloads images ahead of display; the guard keeps the same
//! image from being fetched twice. It is owned by a single caller and needs
//! no locking.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct PreloadGuard {
    seen: HashSet<String>,
}

impl PreloadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `image_ref`. Returns `true` only the first time it is seen.
    pub fn mark(&mut self, image_ref: &str) -> bool {
        if self.seen.contains(image_ref) {
            return false;
        }
        self.seen.insert(image_ref.to_string())
    }

    /// Refs from `refs` not requested before, in input order. Duplicates
    /// within the batch collapse to their first occurrence.
    pub fn schedule<I, S>(&mut self, refs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        refs.into_iter()
            .filter_map(|r| {
                let r = r.as_ref();
                self.mark(r).then(|| r.to_string())
            })
            .collect()
    }

    pub fn contains(&self, image_ref: &str) -> bool {
        self.seen.contains(image_ref)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
