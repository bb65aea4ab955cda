use std::convert::Infallible;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::display;
use crate::element::Element;
use crate::random::Generator;
use crate::transform::Transform;
use crate::vector::Vector;

/// A dense, row-major `R x C` matrix. The shape is part of the type, so
/// operands of the wrong shape are rejected by the compiler.
///
/// Elementwise `+` and `-` are defined between matrices of the same shape;
/// `*` between matrices is the dot product.
#[derive(Arithmetic, Debug, Clone, Copy, PartialEq)]
#[elementwise = "add, sub"]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Element, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ROWS: usize = R;
    pub const COLUMNS: usize = C;

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn columns(&self) -> usize {
        C
    }

    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    pub fn repeat(val: T) -> Self {
        Self {
            data: [[val; C]; R],
        }
    }

    pub fn zeros() -> Self {
        Self::repeat(T::semantic_zero())
    }

    pub fn ones() -> Self {
        Self::repeat(T::one())
    }

    /// Fills the matrix in row-major order, calling `gen.generate()` once per
    /// cell.
    pub fn from_generator<G: Generator<T>>(gen: &mut G) -> Self {
        let mut m = Self::zeros();
        for row in m.data.iter_mut() {
            for cell in row.iter_mut() {
                *cell = gen.generate();
            }
        }

        m
    }

    /// Samples every cell from `d`.
    pub fn sample<D, G>(d: D, rng: &mut G) -> Self
    where
        D: Distribution<T>,
        G: Rng + ?Sized,
    {
        d.sample_iter(rng).take(R * C).collect()
    }

    pub fn randn<G: Rng + ?Sized>(rng: &mut G) -> Self
    where
        StandardNormal: Distribution<T>,
    {
        Self::sample(StandardNormal, rng)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.data.get(i)?.get(j)
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        self.data.get_mut(i)?.get_mut(j)
    }

    /// Panics if `(i, j)` lies outside the matrix.
    pub fn at(&self, i: usize, j: usize) -> &T {
        &self.data[i][j]
    }

    pub fn row(&self, i: usize) -> Option<Vector<T>> {
        self.data.get(i).map(|row| row.iter().copied().collect())
    }

    pub fn column(&self, j: usize) -> Option<Vector<T>> {
        if j >= C {
            return None;
        }
        Some(self.data.iter().map(|row| row[j]).collect())
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.data[j][i])
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flatten()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// Matrix product. The inner dimensions must agree, which the signature
    /// enforces:
    ///
    /// ```
    /// use linalg::matrix::Matrix;
    ///
    /// let a = Matrix::from([[1, 2], [3, 4]]);
    /// let i = Matrix::identity();
    /// assert_eq!(a.dot(&i), a);
    /// ```
    ///
    /// ```compile_fail
    /// use linalg::matrix::Matrix;
    ///
    /// let a: Matrix<f64, 2, 3> = Matrix::zeros();
    /// let b: Matrix<f64, 2, 2> = Matrix::zeros();
    /// let _ = a.dot(&b);
    /// ```
    pub fn dot<const P: usize>(&self, rhs: &Matrix<T, C, P>) -> Matrix<T, R, P> {
        log::trace!("dot: {}x{} . {}x{}", R, C, C, P);

        let mut out = Matrix::<T, R, P>::zeros();
        for (out_row, row) in out.data.iter_mut().zip(self.data.iter()) {
            for (j, cell) in out_row.iter_mut().enumerate() {
                let mut sum = T::semantic_zero();
                for (k, &val) in row.iter().enumerate() {
                    sum += val * rhs.data[k][j];
                }
                *cell = sum;
            }
        }

        out
    }

    /// The compact nested form, e.g. `[[1, 2], [3, 4]]` for `delim = ", "`.
    pub fn join(&self, delim: &str) -> String {
        let rows: Vec<String> = self
            .data
            .iter()
            .map(|row| format!("[{}]", display::join(row, delim)))
            .collect();

        format!("[{}]", rows.join(delim))
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::semantic_zero() })
    }
}

impl<T: Element, const R: usize, const C: usize> Transform for Matrix<T, R, C> {
    type Elem = T;
    type Error = Infallible;

    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self::from_fn(|i, j| f(self.data[i][j]))
    }

    fn zip_map<F>(&self, other: &Self, f: F) -> Result<Self, Infallible>
    where
        F: Fn(T, T) -> T,
    {
        Ok(Self::from_fn(|i, j| f(self.data[i][j], other.data[i][j])))
    }

    fn zip_map_in_place<F>(&mut self, other: &Self, f: F) -> Result<&mut Self, Infallible>
    where
        F: Fn(T, T) -> T,
    {
        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (cell, &val) in row.iter_mut().zip(other_row.iter()) {
                *cell = f(*cell, val);
            }
        }

        Ok(self)
    }
}

impl<T: Element, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(data: [[T; C]; R]) -> Self {
        Self { data }
    }
}

/// Fills row-major. Short input is padded with zeros and extra values are
/// ignored.
impl<T: Element, const R: usize, const C: usize> FromIterator<T> for Matrix<T, R, C> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut vals = iter.into_iter();
        let mut m = Self::zeros();
        for cell in m.data.iter_mut().flatten() {
            *cell = vals.next().unwrap_or_else(T::semantic_zero);
        }

        m
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

impl<'a, 'b, T: Element, const R: usize, const C: usize, const P: usize>
    Mul<&'b Matrix<T, C, P>> for &'a Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: &'b Matrix<T, C, P>) -> Self::Output {
        self.dot(rhs)
    }
}

impl<T: Element, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, C, P>) -> Self::Output {
        self.dot(&rhs)
    }
}

/// One `> [a, b, ...]` line per row.
impl<T: Element, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "> [{}]", display::join(row, ", "))?;
        }

        Ok(())
    }
}
