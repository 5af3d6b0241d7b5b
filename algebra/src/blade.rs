use crate::IsEven;

/// A signed basis blade: bit `i` is set when `e(i+1)` is a factor.
///
/// Two flag bits ride along with the index set. `SIGN` marks a negated blade and `ZERO` marks
/// the result of a product that vanished (overlapping sets in a wedge, for example).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blade(pub u32);

impl std::fmt::Debug for Blade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "Blade(0)");
        }
        let sign = if self.is_positive() { '+' } else { '-' };
        write!(f, "Blade({sign}{:04b})", self.unsigned().0)
    }
}

impl Ord for Blade {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.grade()
            .cmp(&other.grade())
            .then(self.unflagged().0.cmp(&other.unflagged().0))
            .then(other.is_negative().cmp(&self.is_negative()))
    }
}

impl PartialOrd for Blade {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Blade {
    const SIGN: u32 = 1 << 31;
    const ZERO: u32 = 1 << 30;

    pub const fn scalar() -> Self {
        Self(0)
    }

    pub const fn zero() -> Self {
        Self(Self::ZERO)
    }

    /// The unit basis vector `e(i+1)`.
    pub const fn basis(i: u32) -> Self {
        Self(1 << i)
    }

    /// Reverses the order of the factors: negative for grades 2 and 3 (mod 4).
    pub fn rev(self) -> Self {
        let half = self.grade() / 2;
        if half.is_even() {
            self
        } else {
            -self
        }
    }

    pub fn grade_involution(self) -> Self {
        if self.grade().is_even() {
            self
        } else {
            -self
        }
    }

    /// Reversion composed with grade involution: signs `+ - - + +` for grades 0 to 4.
    pub fn clifford_conjugate(self) -> Self {
        self.rev().grade_involution()
    }

    pub fn unsigned(self) -> Self {
        Blade(self.0 & !Self::SIGN)
    }

    /// `1.0`, `-1.0`, or `0.0` for a vanished product.
    pub fn factor(self) -> f64 {
        if self.is_zero() {
            0.0
        } else if self.is_negative() {
            -1.0
        } else {
            1.0
        }
    }

    pub const fn is_positive(self) -> bool {
        self.0 & Self::SIGN != Self::SIGN && !self.is_zero()
    }

    pub const fn is_negative(self) -> bool {
        self.0 & Self::SIGN == Self::SIGN && !self.is_zero()
    }

    pub const fn is_zero(self) -> bool {
        self.0 & Self::ZERO == Self::ZERO
    }

    pub fn is_scalar(self) -> bool {
        self.unsigned() == Blade::scalar()
    }

    /// Index set without either flag.
    pub fn mask(self) -> u32 {
        self.unflagged().0
    }

    fn higher_than(self, i: u32) -> u32 {
        (self.mask() & (u32::MAX << (i + 1))).count_ones()
    }

    /// Euclidean geometric product of two blades.
    ///
    /// Each factor of `rhs` is moved left past every higher factor of `self` to reach its sorted
    /// position. Shared factors then meet and cancel since `e(i)e(i) = 1`, and every transposition
    /// flips the sign.
    pub fn product(self, rhs: Self) -> Self {
        if Blade(self.0 | rhs.0).is_zero() {
            return Self::zero();
        }

        let transpositions = (0..u32::BITS - 2)
            .filter(|&i| rhs.contains(i))
            .map(|i| self.higher_than(i))
            .sum::<u32>();

        let output = self ^ rhs;
        if transpositions.is_even() {
            output
        } else {
            -output
        }
    }

    /// The exterior product: zero whenever the index sets overlap.
    pub fn wedge(self, rhs: Self) -> Self {
        if self.mask() & rhs.mask() != 0 {
            Self::zero()
        } else {
            self.product(rhs)
        }
    }

    pub fn contains(self, i: u32) -> bool {
        let flag = 1 << i;
        self.0 & flag == flag
    }

    pub fn grade(self) -> u32 {
        self.mask().count_ones()
    }

    fn unflagged(self) -> Self {
        Blade(self.0 & !(Self::SIGN | Self::ZERO))
    }

    pub fn pseudoscalar(dim: u32) -> Self {
        Blade(!(u32::MAX << dim))
    }
}

impl std::ops::Neg for Blade {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0 ^ Self::SIGN)
    }
}

impl std::ops::BitXor for Blade {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<T> std::ops::Index<Blade> for Vec<T> {
    type Output = T;

    fn index(&self, index: Blade) -> &Self::Output {
        self.index(index.mask() as usize)
    }
}

impl<T> std::ops::IndexMut<Blade> for Vec<T> {
    fn index_mut(&mut self, index: Blade) -> &mut Self::Output {
        self.index_mut(index.mask() as usize)
    }
}
