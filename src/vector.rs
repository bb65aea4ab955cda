use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use crate::display;
use crate::element::Element;
use crate::errors::{check_len, LinalgError, Result};
use crate::matrix::Matrix;
use crate::random::Generator;
use crate::transform::Transform;

/// A runtime-sized sequence of elements.
///
/// Binary elementwise operators require both operands to have the same
/// length. The operator forms (`a + b`, `a -= b`, ...) panic when they don't;
/// the `try_*` methods return [`LinalgError::ShapeMismatch`] instead.
#[derive(Arithmetic, Debug, Clone, PartialEq)]
#[elementwise = "add, sub, mul, div"]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Element> Vector<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn from_fn(n: usize, f: impl Fn(usize) -> T) -> Self {
        (0..n).map(f).collect()
    }

    pub fn repeat(n: usize, val: T) -> Self {
        Self { data: vec![val; n] }
    }

    pub fn zeros(n: usize) -> Self {
        Self::repeat(n, T::semantic_zero())
    }

    /// Builds a vector of length `n`, calling `gen.generate()` once per
    /// element.
    pub fn from_generator<G: Generator<T>>(n: usize, gen: &mut G) -> Self {
        (0..n).map(|_| gen.generate()).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }

    /// Inner product of two vectors of equal length.
    pub fn inner(&self, other: &Self) -> Result<T> {
        check_len("inner", self.len(), other.len())?;

        let mut sum = T::semantic_zero();
        for (&a, &b) in self.data.iter().zip(other.data.iter()) {
            sum += a * b;
        }

        Ok(sum)
    }

    /// Treats `self` as a row vector and multiplies it by `m`. The length of
    /// `self` must equal the number of rows in `m`; the result has one element
    /// per column.
    pub fn dot<const R: usize, const C: usize>(&self, m: &Matrix<T, R, C>) -> Result<Self> {
        check_len("dot", self.len(), R)?;
        log::trace!("dot: {} . {}x{}", self.len(), R, C);

        Ok((0..C)
            .map(|j| {
                let mut sum = T::semantic_zero();
                for (i, &val) in self.data.iter().enumerate() {
                    sum += val * m[(i, j)];
                }
                sum
            })
            .collect())
    }
}

impl<T: Element> Transform for Vector<T> {
    type Elem = T;
    type Error = LinalgError;

    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.data.iter().map(|&x| f(x)).collect()
    }

    fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        check_len("elementwise operation", self.len(), other.len())?;

        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    fn zip_map_in_place<F>(&mut self, other: &Self, f: F) -> Result<&mut Self>
    where
        F: Fn(T, T) -> T,
    {
        check_len("elementwise operation", self.len(), other.len())?;

        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = f(*a, b);
        }

        Ok(self)
    }
}

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(vals: [T; N]) -> Self {
        Self {
            data: vals.into(),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.data[i]
    }
}

impl<'a, 'b, T: Element, const R: usize, const C: usize> Mul<&'b Matrix<T, R, C>>
    for &'a Vector<T>
{
    type Output = Vector<T>;

    fn mul(self, rhs: &'b Matrix<T, R, C>) -> Self::Output {
        match self.dot(rhs) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Element, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        &self * &rhs
    }
}

/// `[a, b, ...]`
impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", display::join(&self.data, ", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{self, Random};

    #[test]
    fn test_basics() {
        let mut v = Vector::from([1, 2, 3, 4, 5]);
        assert_eq!(v.len(), 5);
        assert!(!v.is_empty());
        assert_eq!(v[3], 4);
        assert_eq!(v.get(5), None);

        v[0] = 10;
        assert_eq!(v.as_slice(), &[10, 2, 3, 4, 5]);
        assert_eq!(v.iter().sum::<i32>(), 24);

        let empty: Vector<f64> = Vector::new();
        assert!(empty.is_empty());
        assert_eq!(empty, Vector::default());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        let v: Vector<f64> = Vector::zeros(2);
        let _ = v[2];
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Vector::from_fn(4, |i| i * 2), Vector::from([0, 2, 4, 6]));
        assert_eq!(Vector::repeat(3, 2.0), Vector::from(vec![2.0, 2.0, 2.0]));
        assert_eq!(Vector::<u8>::zeros(2).into_inner(), vec![0, 0]);

        let mut n = 0;
        let mut gen = random::from_fn(|| {
            n += 3;
            n
        });
        assert_eq!(Vector::from_generator(3, &mut gen), Vector::from([3, 6, 9]));

        let mut r: Random<f64> = Random::new();
        let v = Vector::from_generator(2, &mut r);
        assert_eq!(v.len(), 2);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn test_elementwise() {
        let v: Vector<f64> = Vector::from([2.0, 3.0]);

        assert_eq!(&v + &v, Vector::from([4.0, 6.0]));
        assert_eq!(&v - &v, Vector::from([0.0, 0.0]));
        assert_eq!(&v * &v, Vector::from([4.0, 9.0]));
        assert_eq!(v.clone() / v.clone(), Vector::from([1.0, 1.0]));
        assert_eq!(-&v, Vector::from([-2.0, -3.0]));
    }

    #[test]
    fn test_scalar() {
        let v: Vector<f64> = Vector::from([2.0, 4.0]);

        assert_eq!(1.0 + &v, Vector::from([3.0, 5.0]));
        assert_eq!(&v + 1.0, Vector::from([3.0, 5.0]));
        assert_eq!(1.0 - &v, Vector::from([-1.0, -3.0]));
        assert_eq!(&v - 1.0, Vector::from([1.0, 3.0]));
        assert_eq!(3.0 * &v, Vector::from([6.0, 12.0]));
        assert_eq!(&v * 3.0, Vector::from([6.0, 12.0]));
        assert_eq!(1.0 / &v, Vector::from([0.5, 0.25]));
        assert_eq!(v / 2.0, Vector::from([1.0, 2.0]));
    }

    #[test]
    fn test_sub_assign() {
        let mut v: Vector<i64> = Vector::from([5, -7, 9]);
        let w = v.clone();
        v -= &w;
        assert_eq!(v, Vector::zeros(3));

        let mut v: Vector<i64> = Vector::from([5, 7]);
        v -= Vector::from([1, 2]);
        assert_eq!(v, Vector::from([4, 5]));
    }

    #[test]
    fn test_shape_mismatch() {
        let a: Vector<f64> = Vector::from([1.0, 2.0]);
        let b: Vector<f64> = Vector::from([1.0, 2.0, 3.0]);

        let err = LinalgError::ShapeMismatch {
            op: "elementwise operation",
            left: 2,
            right: 3,
        };
        assert_eq!(a.try_add(&b), Err(err.clone()));
        assert_eq!(a.try_sub(&b), Err(err.clone()));
        assert_eq!(a.try_mul(&b), Err(err.clone()));
        assert_eq!(a.try_div(&b), Err(err.clone()));

        let mut c = a.clone();
        assert_eq!(c.try_sub_assign(&b), Err(err));
        assert_eq!(c, a);

        assert!(a.inner(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_operator_panics_on_mismatch() {
        let a: Vector<i32> = Vector::from([1, 2]);
        let b: Vector<i32> = Vector::from([1]);
        let _ = a + b;
    }

    #[test]
    fn test_inner() {
        let a: Vector<f64> = Vector::from([1.0, 2.0, 3.0]);
        let b: Vector<f64> = Vector::from([4.0, 5.0, 6.0]);
        assert_eq!(a.inner(&b), Ok(32.0));
        assert_eq!(Vector::<i32>::new().inner(&Vector::new()), Ok(0));
    }

    #[test]
    fn test_dot() {
        let v: Vector<i32> = Vector::from([2, 2]);
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(v.dot(&m), Ok(Vector::from([10, 14, 18])));
        assert_eq!(&v * &m, Vector::from([10, 14, 18]));

        let short: Vector<i32> = Vector::from([1]);
        assert_eq!(
            short.dot(&m),
            Err(LinalgError::ShapeMismatch {
                op: "dot",
                left: 1,
                right: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let v: Vector<f64> = Vector::from([2.0, 3.0]);
        assert_eq!(v.to_string(), "[2.0000, 3.0000]");
        assert_eq!(Vector::from([1, 2]).to_string(), "[1, 2]");
        assert_eq!(Vector::<f32>::new().to_string(), "[]");
    }
}
