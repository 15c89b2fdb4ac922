//! Edit cursor over the navigable pins.
//!
//! The cursor is a single pin id constrained to the non-Ground set; moving
//! past either end wraps around.  Ground pins are unreachable by
//! construction — every transition re-derives the navigable set from the
//! pin table, so a table change cannot strand the cursor.

use heapless::Vec;

use crate::pins::{PIN_COUNT, PinTable};

/// The single pin currently selected for toggling/tone feedback.
#[derive(Debug, Clone, Copy)]
pub struct EditCursor {
    current: u8,
}

impl EditCursor {
    /// Place the cursor on `start`, falling back to the first navigable
    /// pin when `start` is not itself navigable.
    pub fn new(start: u8, table: &PinTable) -> Self {
        let current = table
            .navigable_ids()
            .find(|&id| id == start)
            .or_else(|| table.navigable_ids().next())
            .unwrap_or(1);
        Self { current }
    }

    /// Pin id under the cursor.
    pub fn pin_id(&self) -> u8 {
        self.current
    }

    /// Move to the previous navigable pin, wrapping to the last.
    pub fn move_up(&mut self, table: &PinTable) {
        self.step(table, -1);
    }

    /// Move to the next navigable pin, wrapping to the first.
    pub fn move_down(&mut self, table: &PinTable) {
        self.step(table, 1);
    }

    fn step(&mut self, table: &PinTable, delta: isize) {
        let ids: Vec<u8, PIN_COUNT> = table.navigable_ids().collect();
        if ids.is_empty() {
            return;
        }
        // A cursor off the navigable set is a defensive-invariant
        // violation; re-home it at index 0 rather than panic.
        let idx = ids.iter().position(|&id| id == self.current).unwrap_or(0);
        let len = ids.len() as isize;
        let next = (idx as isize + delta).rem_euclid(len) as usize;
        self.current = ids[next];
    }
}
