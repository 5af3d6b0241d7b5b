//! Elements of any grade behind one type, for callers that pick operations at runtime.

use strum::EnumIter;

use crate::{Commutator, Dim, Dot, GeoError, KVector, MultiVector, Result, Wedge};

/// An element tagged with its grade, or a multivector when it spans several grades.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(KVector),
    Bivector(KVector),
    Trivector(KVector),
    Quadvector(KVector),
    MultiVector(MultiVector),
}

impl Value {
    /// `None` for a multivector.
    pub fn grade(&self) -> Option<u32> {
        match self {
            Value::Scalar(_) => Some(0),
            Value::Vector(_) => Some(1),
            Value::Bivector(_) => Some(2),
            Value::Trivector(_) => Some(3),
            Value::Quadvector(_) => Some(4),
            Value::MultiVector(_) => None,
        }
    }

    /// `None` for a scalar, which has no dimension of its own.
    pub fn dim(&self) -> Option<Dim> {
        match self {
            Value::Scalar(_) => None,
            Value::Vector(k) | Value::Bivector(k) | Value::Trivector(k) | Value::Quadvector(k) => {
                Some(k.dim())
            }
            Value::MultiVector(mv) => Some(mv.dim()),
        }
    }

    pub fn to_multivector(self) -> MultiVector {
        match self {
            Value::Scalar(s) => MultiVector::from(s),
            Value::Vector(k) | Value::Bivector(k) | Value::Trivector(k) | Value::Quadvector(k) => {
                MultiVector::from(k)
            }
            Value::MultiVector(mv) => mv,
        }
    }

    /// The single grade of this value, if it has one.
    pub fn to_kvector(self) -> Option<KVector> {
        match self {
            Value::Scalar(s) => Some(KVector::scalar(s)),
            Value::Vector(k) | Value::Bivector(k) | Value::Trivector(k) | Value::Quadvector(k) => {
                Some(k)
            }
            Value::MultiVector(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<KVector> for Value {
    fn from(value: KVector) -> Self {
        match value.grade() {
            0 => Value::Scalar(value.as_scalar().unwrap_or(0.0)),
            1 => Value::Vector(value),
            2 => Value::Bivector(value),
            3 => Value::Trivector(value),
            _ => Value::Quadvector(value),
        }
    }
}

impl From<MultiVector> for Value {
    /// Collapses to the tightest variant: a multivector occupying a single grade becomes that
    /// grade.
    fn from(value: MultiVector) -> Self {
        match value.as_kvector() {
            Some(k) => Value::from(k),
            None => Value::MultiVector(value),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter)]
pub enum BinaryOp {
    Add,
    Sub,
    Geo,
    Dot,
    Wedge,
    Commutator,
    Div,
}

impl BinaryOp {
    /// Applies the operation, collapsing the result to its tightest variant.
    pub fn call(self, lhs: Value, rhs: Value) -> Result<Value> {
        if let (Some(l), Some(r)) = (lhs.to_kvector(), rhs.to_kvector()) {
            match self {
                BinaryOp::Dot => return Ok(l.dot(r).into()),
                BinaryOp::Wedge => return Ok(l.wedge(r).into()),
                _ => {}
            }
        }
        let (lhs, rhs) = (lhs.to_multivector(), rhs.to_multivector());
        let output = match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Geo => lhs * rhs,
            BinaryOp::Dot => lhs.dot(rhs),
            BinaryOp::Wedge => lhs.wedge(rhs),
            BinaryOp::Commutator => lhs.commutator(rhs),
            BinaryOp::Div => lhs.div(rhs)?,
        };
        Ok(output.into())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter)]
pub enum UnaryOp {
    Neg,
    Rev,
    Conj,
    Inverse,
    Exp,
    Ln,
    Norm,
}

impl UnaryOp {
    pub fn call(self, value: Value) -> Result<Value> {
        if let Some(k) = value.to_kvector() {
            return match self {
                UnaryOp::Neg => Ok((-k).into()),
                UnaryOp::Rev => Ok(k.rev().into()),
                UnaryOp::Conj => Ok(k.conj().into()),
                UnaryOp::Inverse => Ok(k.inverse()?.into()),
                UnaryOp::Exp => Ok(k.exp().into()),
                UnaryOp::Ln => Ok(k.ln()?.into()),
                UnaryOp::Norm => match k.as_scalar() {
                    Some(s) if s == 0.0 => Err(GeoError::DivisionByZero),
                    Some(s) => Ok(s.signum().into()),
                    None => Ok(k.norm()?.into()),
                },
            };
        }
        let mv = value.to_multivector();
        let output = match self {
            UnaryOp::Neg => -mv,
            UnaryOp::Rev => mv.rev(),
            UnaryOp::Conj => mv.conj(),
            UnaryOp::Inverse => mv.inverse()?,
            UnaryOp::Exp => mv.exp(),
            UnaryOp::Ln => mv.ln()?,
            UnaryOp::Norm => mv.norm(),
        };
        Ok(output.into())
    }
}
