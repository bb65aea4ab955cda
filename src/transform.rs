use crate::element::Element;

/// Elementwise iteration over a container. These three primitives are the only
/// loops behind the arithmetic operators; `#[derive(Arithmetic)]` builds every
/// operator out of them.
pub trait Transform: Sized {
    type Elem: Element;
    /// Returned when two operands disagree in shape. Containers whose shape is
    /// part of their type use [`std::convert::Infallible`].
    type Error: std::error::Error;

    /// Applies `f` to every element, producing a new container of the same
    /// shape.
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Self::Elem) -> Self::Elem;

    /// Combines corresponding elements of `self` and `other`. `self` always
    /// supplies the left operand.
    fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self, Self::Error>
    where
        F: Fn(Self::Elem, Self::Elem) -> Self::Elem;

    /// Like [`Transform::zip_map`] but overwrites `self`.
    fn zip_map_in_place<F>(&mut self, other: &Self, f: F) -> Result<&mut Self, Self::Error>
    where
        F: Fn(Self::Elem, Self::Elem) -> Self::Elem;
}
