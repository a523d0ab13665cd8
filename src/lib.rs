//! Geovec provides a small, fixed-size numeric vector type for geometry code.
//! A `Vector<T, DIM>` holds exactly `DIM` components of type `T` inline, and
//! the dimension is part of the type. Operations that only make sense for
//! certain dimensions are rejected by the compiler rather than at runtime:
//! the named accessors `x`, `y`, `z` and `w` exist only for vectors that have
//! that many components, `dot` and `for_each` require operands of equal
//! dimension, and `cross` is defined only for 3-vectors.
//!
//! ```
//! use geovec::{cross, dot, make_vector, Vector};
//!
//! let a = Vector::new([1.0, 0.0, 0.0]);
//! let b = make_vector!(0, 1, 0.0);
//! assert_eq!(cross(&a, &b), Vector::new([0.0, 0.0, 1.0]));
//! assert_eq!(dot(&a, &b), 0.0);
//! assert_eq!(*a.x(), a[0]);
//! ```
//!
//! Each of the following fails to compile.
//!
//! A `w` component on a 2-vector:
//!
//! ```compile_fail
//! let v = geovec::Vector::new([1.0, 2.0]);
//! let _ = v.w();
//! ```
//!
//! A cross product of 4-vectors:
//!
//! ```compile_fail
//! let a = geovec::Vector::new([1.0, 0.0, 0.0, 0.0]);
//! let b = geovec::Vector::new([0.0, 1.0, 0.0, 0.0]);
//! let _ = geovec::cross(&a, &b);
//! ```
//!
//! A dot product of vectors with different dimensions:
//!
//! ```compile_fail
//! let a = geovec::Vector::new([1.0, 2.0]);
//! let b = geovec::Vector::new([1.0, 2.0, 3.0]);
//! let _: f64 = geovec::dot(&a, &b);
//! ```
//!
//! A combinator over vectors with different dimensions:
//!
//! ```compile_fail
//! let a = geovec::Vector::new([1, 2]);
//! let b = geovec::Vector::new([1, 2, 3]);
//! geovec::for_each(|_, (x, y): (&i32, &i32)| x + y, (&a, &b));
//! ```
//!
//! A compile-time index past the last component:
//!
//! ```compile_fail
//! let v = geovec::Vector::new([1, 2, 3]);
//! let _ = v.at::<3>();
//! ```
//!
//! A vector with no components, or from values with no common type:
//!
//! ```compile_fail
//! let _ = geovec::make_vector!();
//! ```
//!
//! ```compile_fail
//! let _ = geovec::Vector::<f32, 0>::new([]);
//! ```
//!
//! ```compile_fail
//! let _ = geovec::Vector::<i32, 0>::default();
//! ```
//!
//! ```compile_fail
//! let _ = geovec::make_vector!(1u8, "two");
//! ```

pub mod codec;
pub mod component;
pub mod error;
pub mod products;
pub mod promote;
pub mod vector;

pub use component::{for_each, Components};
pub use error::Error;
pub use products::{cross, dot};
pub use promote::{make_vector, MakeVector, Promote};
pub use vector::Vector;

pub type VectorF<const DIM: usize> = Vector<f32, DIM>;
pub type VectorD<const DIM: usize> = Vector<f64, DIM>;

pub type Vector1<T> = Vector<T, 1>;
pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type VectorF1 = VectorF<1>;
pub type VectorF2 = VectorF<2>;
pub type VectorF3 = VectorF<3>;
pub type VectorF4 = VectorF<4>;

pub type VectorD1 = VectorD<1>;
pub type VectorD2 = VectorD<2>;
pub type VectorD3 = VectorD<3>;
pub type VectorD4 = VectorD<4>;
