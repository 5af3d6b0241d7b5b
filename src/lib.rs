//! Geometric algebra over Euclidean spaces of dimension 1 to 4
//!
//! Elements are [`KVector`]s (one grade) and [`MultiVector`]s (sums of grades), tagged with their
//! [`Dim`]. Binary operations between different dimensions first promote the smaller operand by
//! zero-padding, so a 2D vector can be added to or multiplied by a 4D bivector directly.
//!
//! Each dimension has a module generated by [`macros::algebra!`] with its basis constants and
//! const constructors:
//!
//! ```
//! use geoalg::{ga_3d, Wedge};
//!
//! let a = ga_3d::vector(1., 0., 0.);
//! let b = ga_3d::vector(0., 1., 0.);
//! assert_eq!(ga_3d::XY, a.wedge(b));
//! assert_eq!(ga_3d::XY, a * b);
//! ```
//!
//! Supported operations:
//! - Products: geometric (`*`), dot, wedge, commutator, grade projection of a product
//! - Sums: `+` and `-` between any elements, same-grade `plus` and `minus`
//! - Unary: negation, reverse, grade involution, Clifford conjugate
//! - Norm-based: magnitude, normalization, inverse, division, integer powers
//! - Transcendental: exp, ln, hyperbolic functions
//! - Rotors, projection and reflection onto blades
//! - Simple and orthogonal decomposition of 4D bivectors

pub mod ga_1d;
pub mod ga_2d;
pub mod ga_3d;
pub mod ga_4d;

mod decompose;
mod dim;
mod error;
mod inverse;
mod kvector;
mod layout;
mod multivector;
mod product;
mod projection;
mod rotor;
#[cfg(feature = "rand")]
mod sample;
mod tolerance;
mod transcendental;
mod value;

pub use dim::Dim;
pub use error::{GeoError, Result};
pub use kvector::KVector;
pub use layout::Layout;
pub use multivector::MultiVector;
pub use rotor::Rotor;
#[cfg(feature = "rand")]
pub use sample::{KVectorSampler, MultiVectorSampler};
pub use value::{BinaryOp, UnaryOp, Value};

/// Relative tolerance used to choose between the closed forms of a 4D bivector (single plane,
/// equal angles, or two planes) and to check that a logarithm basis squares to -1.
pub const EPSILON: f64 = 1e-12;

pub trait Geo<Rhs = Self> {
    type Output;
    fn geo(self, rhs: Rhs) -> Self::Output;
}

/// The grade `|g1 - g2|` part of the geometric product.
pub trait Dot<Rhs = Self> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// The grade `g1 + g2` part of the geometric product.
pub trait Wedge<Rhs = Self> {
    type Output;
    fn wedge(self, rhs: Rhs) -> Self::Output;
}

/// `(AB - BA) / 2`
pub trait Commutator<Rhs = Self> {
    type Output;
    fn commutator(self, rhs: Rhs) -> Self::Output;
}

/// The grade `k` part of the geometric product.
pub trait GradeProduct<Rhs = Self> {
    type Output;
    fn grade_product(self, rhs: Rhs, grade: u32) -> Self::Output;
}

pub trait Sandwich<Rhs> {
    type Output;
    fn sandwich(&self, rhs: Rhs) -> Self::Output;
}
