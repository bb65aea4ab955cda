#[macro_use]
extern crate linalg_derive;

pub mod display;
pub mod element;
pub mod errors;
pub mod matrix;
pub mod ops;
pub mod random;
pub mod transform;
pub mod vector;

pub use element::Element;
pub use errors::{LinalgError, Result};
pub use matrix::Matrix;
pub use random::{Generator, Random};
pub use transform::Transform;
pub use vector::Vector;
