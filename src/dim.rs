use strum::EnumIter;

use crate::layout::Layout;
use crate::{ga_1d, ga_2d, ga_3d, ga_4d};

/// Number of basis blades of each grade: `BINOMIAL[n][k]` is n choose k.
const BINOMIAL: [[usize; 5]; 5] = [
    [1, 0, 0, 0, 0],
    [1, 1, 0, 0, 0],
    [1, 2, 1, 0, 0],
    [1, 3, 3, 1, 0],
    [1, 4, 6, 4, 1],
];

/// A supported Euclidean dimension.
///
/// Ordered by size, so `lhs.max(rhs)` is the dimension both operands promote to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, EnumIter)]
pub enum Dim {
    One = 1,
    Two,
    Three,
    Four,
}

impl Dim {
    pub const fn n(self) -> u32 {
        self as u32
    }

    pub const fn from_n(n: u32) -> Option<Self> {
        match n {
            1 => Some(Dim::One),
            2 => Some(Dim::Two),
            3 => Some(Dim::Three),
            4 => Some(Dim::Four),
            _ => None,
        }
    }

    /// Number of blades across all grades.
    pub const fn len(self) -> usize {
        1 << self.n()
    }

    /// Number of blades of the given grade, zero above the dimension.
    pub const fn grade_len(self, grade: u32) -> usize {
        if grade > self.n() {
            0
        } else {
            BINOMIAL[self.n() as usize][grade as usize]
        }
    }

    pub const fn contains_grade(self, grade: u32) -> bool {
        grade <= self.n()
    }

    pub(crate) const fn grade_offset(self, grade: u32) -> usize {
        let mut offset = 0;
        let mut g = 0;
        while g < grade && g <= self.n() {
            offset += self.grade_len(g);
            g += 1;
        }
        offset
    }

    /// Storage order and Cayley table of this dimension.
    pub fn layout(self) -> &'static Layout {
        match self {
            Dim::One => &ga_1d::LAYOUT,
            Dim::Two => &ga_2d::LAYOUT,
            Dim::Three => &ga_3d::LAYOUT,
            Dim::Four => &ga_4d::LAYOUT,
        }
    }
}
