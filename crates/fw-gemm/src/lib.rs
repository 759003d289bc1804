//! `fw-gemm` - Dense column-major matrices and a reference GEMM kernel.
//!
//! This crate provides:
//! - A raw-buffer kernel, [`gemm`] / [`gemm_strided`], over borrowed
//!   column-major slices with explicit leading dimensions
//! - An owned column-major [`Matrix`] type and the [`multiply`] entry point
//! - A `GemmBackend` trait for plugging in faster kernels, with the
//!   reference `CpuBackend`
//! - The [`Element`] trait describing which scalars can be multiplied
//!
//! ```
//! use fw_gemm::{multiply, Matrix};
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let c = multiply(&a, &Matrix::identity(2)).unwrap();
//! assert_eq!(c.as_slice(), &[1, 3, 2, 4]);
//! ```

pub mod backend;
pub mod cpu;
pub mod element;
pub mod error;
pub mod layout;
pub mod matrix;

// Re-export primary types at the crate root for convenience.
pub use backend::GemmBackend;
pub use cpu::gemm::{gemm, gemm_strided};
pub use cpu::CpuBackend;
pub use element::Element;
pub use error::{GemmError, Result};
pub use layout::Layout;
pub use matrix::{multiply, multiply_with_backend, Matrix};
