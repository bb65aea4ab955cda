//! The scalar-binding adapter: turns a binary operation plus one bound operand
//! into a unary operation that the transform primitives can apply.

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn apply<T: Element>(self, lhs: T, rhs: T) -> T {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// Which operand position the bound value occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A [`BinaryOp`] with one operand fixed.
///
/// `Bound::left(s, op).apply(x)` is `op(s, x)` and
/// `Bound::right(op, s).apply(x)` is `op(x, s)`. The two only agree for
/// commutative operations, which is what keeps `s - m` and `m - s` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound<T> {
    op: BinaryOp,
    operand: T,
    side: Side,
}

impl<T: Element> Bound<T> {
    pub fn left(operand: T, op: BinaryOp) -> Self {
        Self {
            op,
            operand,
            side: Side::Left,
        }
    }

    pub fn right(op: BinaryOp, operand: T) -> Self {
        Self {
            op,
            operand,
            side: Side::Right,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn apply(&self, x: T) -> T {
        match self.side {
            Side::Left => self.op.apply(self.operand, x),
            Side::Right => self.op.apply(x, self.operand),
        }
    }
}
