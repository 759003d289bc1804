use std::fmt::Debug;

use crate::element::Element;
use crate::error::Result;

/// Trait for pluggable GEMM kernels.
///
/// Implementations compute C = A * B over column-major buffers with explicit
/// leading dimensions, following the contract of
/// [`gemm_strided`](crate::cpu::gemm::gemm_strided): validate every operand
/// before writing, overwrite exactly the m x n window of `c`, and accumulate
/// each entry in increasing order of the shared index so results match the
/// reference kernel bit for bit.
pub trait GemmBackend<T: Element>: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A * B.
    ///
    /// - `a`: m x k, column stride `lda`
    /// - `b`: k x n, column stride `ldb`
    /// - `c`: m x n, column stride `ldc`
    #[allow(clippy::too_many_arguments)]
    fn gemm(
        &self,
        m: usize,
        n: usize,
        k: usize,
        a: &[T],
        lda: usize,
        b: &[T],
        ldb: usize,
        c: &mut [T],
        ldc: usize,
    ) -> Result<()>;
}
