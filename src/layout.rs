use crate::Dim;

/// Storage layout of one dimension, generated by `macros::algebra!`.
///
/// Slots are grade-major. `masks[slot]` is the blade's index set and `flipped[slot]` marks a
/// blade stored with the opposite orientation to its sorted factors (`zx = -e1e3`). `cayley` is
/// the row-major table of `(slot, sign)` for the product of every pair of slots.
#[derive(Debug)]
pub struct Layout {
    pub(crate) dim: Dim,
    pub(crate) fields: &'static [&'static str],
    pub(crate) masks: &'static [u8],
    pub(crate) flipped: &'static [bool],
    pub(crate) cayley: &'static [(u8, i8)],
}

impl Layout {
    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    pub fn grade(&self, slot: usize) -> u32 {
        self.masks[slot].count_ones()
    }

    pub fn field(&self, slot: usize) -> &'static str {
        self.fields[slot]
    }

    pub fn slot_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }

    /// Resulting slot and sign of the product of two stored blades.
    #[inline]
    pub fn product(&self, lhs: usize, rhs: usize) -> (usize, f64) {
        let (slot, sign) = self.cayley[lhs * self.len() + rhs];
        (slot as usize, sign as f64)
    }

    /// Where a slot of this layout lands in a layout of another dimension, with the sign
    /// correcting for a different stored orientation. `None` when the blade does not exist there.
    pub fn map_slot(&self, slot: usize, target: &Layout) -> Option<(usize, f64)> {
        let mask = self.masks[slot];
        let target_slot = target.masks.iter().position(|m| *m == mask)?;
        let sign = if self.flipped[slot] == target.flipped[target_slot] {
            1.0
        } else {
            -1.0
        };
        Some((target_slot, sign))
    }
}
