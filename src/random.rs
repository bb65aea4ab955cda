//! Random element generation.
//!
//! All [`Random`] instances built with [`Random::new`] draw from the
//! thread-local engine behind `rand::thread_rng()`, which is seeded lazily on
//! first use and never torn down. Nothing here is synchronized; callers that
//! share a source across threads must serialize access themselves. Tests
//! inject a seeded source through [`Random::with_rng`].

use std::marker::PhantomData;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::element::Element;
use crate::errors::{LinalgError, Result};

/// Anything that can hand out one element at a time. Containers call
/// `generate()` once per cell when built from a generator.
pub trait Generator<T> {
    fn generate(&mut self) -> T;
}

/// A [`Generator`] backed by a closure.
pub struct FromFn<F>(F);

pub fn from_fn<T, F: FnMut() -> T>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<T, F: FnMut() -> T> Generator<T> for FromFn<F> {
    fn generate(&mut self) -> T {
        (self.0)()
    }
}

/// Picks the distribution family for an element type: uniform integers over
/// `[0, MAX]`, uniform reals over `[0, 1)`.
pub trait RandomElement: SampleUniform + Sized {
    fn full_range() -> Uniform<Self>;
    fn valid_range(start: Self, end: Self) -> bool;
}

macro_rules! random_int {
    ( $( $t:ty ),* ) => {
        $(
            impl RandomElement for $t {
                fn full_range() -> Uniform<Self> {
                    Uniform::new_inclusive(0, <$t>::MAX)
                }

                fn valid_range(start: Self, end: Self) -> bool {
                    start <= end
                }
            }
        )*
    };
}

macro_rules! random_float {
    ( $( $t:ty ),* ) => {
        $(
            impl RandomElement for $t {
                fn full_range() -> Uniform<Self> {
                    Uniform::new(0.0, 1.0)
                }

                // `Uniform` scales the span by `1 / (1 - EPSILON)` and rejects
                // anything that overflows.
                fn valid_range(start: Self, end: Self) -> bool {
                    start <= end && ((end - start) / (1.0 - <$t>::EPSILON)).is_finite()
                }
            }
        )*
    };
}

random_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
random_float!(f32, f64);

pub struct Random<T, R = ThreadRng> {
    rng: R,
    _markers: PhantomData<T>,
}

impl<T: Element> Random<T> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl<T: Element> Default for Random<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, R: Rng> Random<T, R> {
    /// Uses `rng` as the entropy source. Pass `&mut rng` to share one source
    /// between several generators.
    pub fn with_rng(rng: R) -> Self {
        log::debug!("random generator for {}", std::any::type_name::<T>());
        Self {
            rng,
            _markers: PhantomData,
        }
    }

    /// Draws from the inclusive range `[start, end]`.
    ///
    /// Every call builds its distribution from the bounds it is given, so a
    /// later call with a different range is honoured.
    pub fn generate_range(&mut self, start: T, end: T) -> Result<T> {
        if !T::valid_range(start, end) {
            return Err(LinalgError::InvalidRange {
                start: format!("{:?}", start),
                end: format!("{:?}", end),
            });
        }

        Ok(Uniform::new_inclusive(start, end).sample(&mut self.rng))
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<T: Element, R: Rng> Generator<T> for Random<T, R> {
    fn generate(&mut self) -> T {
        T::full_range().sample(&mut self.rng)
    }
}
