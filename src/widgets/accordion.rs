//! Single-open FAQ accordion.
//!
//! A group of question/answer items where activating one item first forces
//! every sibling closed, then toggles the clicked item relative to its prior
//! state. Net effect: at most one item open at any time, and clicking the
//! open item closes it, leaving zero open. This group invariant is the
//! deliberate opposite of nav dropdowns, which toggle independently.

/// Accordion state over `len` items.
#[derive(Debug, Clone)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn new(len: usize) -> Accordion {
        Accordion {
            open: vec![false; len],
        }
    }

    /// Handle a click on item `i`. Out-of-range clicks still close
    /// everything (there is no item to toggle).
    pub fn click(&mut self, i: usize) {
        let was_open = self.open.get(i).copied().unwrap_or(false);
        self.open.fill(false);
        if let Some(slot) = self.open.get_mut(i) {
            *slot = !was_open;
        }
    }

    pub fn is_open(&self, i: usize) -> bool {
        self.open.get(i).copied().unwrap_or(false)
    }

    /// The open item, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|&o| o)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
