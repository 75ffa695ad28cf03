//! Fixed-size linear algebra for the Lucent renderer.
//!
//! This library provides the vector, matrix, quaternion, transform and
//! bounding-volume types every spatial computation in Lucent is built on. It
//! deliberately has no dependency on windowing, GPU APIs or image codecs, so
//! it can be used (and tested) on its own.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be
//!   significantly simplified by relying on const generics to specify vector
//!   and matrix dimensions, and every renderer use site knows its dimensions
//!   at compile time.
//! - Support only a single, row-major, unpadded data layout for matrices and
//!   vectors. A [`Mat4f`] is exactly 16 contiguous floats in reading order
//!   and a [`Vec3f`]/[`Vec4f`] is exactly 3/4 contiguous floats, which is
//!   what GPU constant buffers and vertex attributes expect; the
//!   [`bytemuck`] impls make the raw-byte view safe.
//! - Be generic over the element type, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Every entity is a plain value: no allocation, no I/O, no recoverable
//!   errors. Contract violations (division by zero, inverting a singular
//!   matrix, normalizing a zero-length quaternion) are checked by debug
//!   assertions and propagate NaN/Inf in release builds.
//! - Construction and arithmetic with algebraically special operands skips
//!   work at compile time: see the [`Zero`], [`Identity`] and [`Unit`] tags.
//! - Don't have any unstable public dependencies. "Unstable" includes
//!   everything pre-1.0, as well as libraries that violate semver, as well
//!   as libraries that regularly do breaking post-1.0 releases.

pub mod approx;
mod bounds;
mod matrix;
mod quat;
mod ray;
mod simd;
mod tags;
mod traits;
mod transform;
mod vector;

pub use bounds::*;
pub use matrix::*;
pub use quat::*;
pub use ray::*;
pub use simd::*;
pub use tags::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
