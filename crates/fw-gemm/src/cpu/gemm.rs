//! Reference GEMM kernel over borrowed column-major slices.
//!
//! The loops are the textbook row/col/i nest with the inner product summed in
//! strictly increasing `i`. That order fixes floating-point rounding, so any
//! faster kernel slotted in behind [`GemmBackend`](crate::GemmBackend) has to
//! reproduce it to give identical results.

use crate::element::Element;
use crate::error::Result;
use crate::layout::Layout;

/// C = A * B on packed column-major buffers.
///
/// - `a`: m x k, leading dimension m
/// - `b`: k x n, leading dimension k
/// - `c`: m x n, leading dimension m, caller-owned
///
/// Every entry of the m x n result is overwritten. With `k == 0` each entry
/// becomes `T::zero()`; with `m == 0` or `n == 0` nothing is written.
///
/// # Errors
/// Returns `BufferTooSmall` if any slice is shorter than its layout needs,
/// or `InvalidDimension` if a buffer size overflows `usize`. Nothing is
/// written to `c` on error.
pub fn gemm<T: Element>(
    m: usize,
    n: usize,
    k: usize,
    a: &[T],
    b: &[T],
    c: &mut [T],
) -> Result<()> {
    gemm_strided(m, n, k, a, m.max(1), b, k.max(1), c, m.max(1))
}

/// C = A * B with explicit leading dimensions.
///
/// `lda`, `ldb` and `ldc` are the column strides of A (m x k), B (k x n) and
/// C (m x n). Slots of `c` between the last row of a column and the start of
/// the next one are left untouched.
///
/// # Errors
/// Returns `InvalidDimension` if a leading dimension is smaller than its
/// operand's row count (or zero), and `BufferTooSmall` if a slice cannot
/// hold its operand. Validation happens before any write.
#[allow(clippy::too_many_arguments)]
pub fn gemm_strided<T: Element>(
    m: usize,
    n: usize,
    k: usize,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    let la = Layout::new(m, k, lda);
    let lb = Layout::new(k, n, ldb);
    let lc = Layout::new(m, n, ldc);
    la.validate("a", a.len())?;
    lb.validate("b", b.len())?;
    lc.validate("c", c.len())?;

    log::trace!("gemm<{}>: a={} b={} c={}", T::NAME, la, lb, lc);

    for row in 0..m {
        for col in 0..n {
            let mut acc = T::zero();
            for i in 0..k {
                acc += a[la.offset(row, i)] * b[lb.offset(i, col)];
            }
            c[lc.offset(row, col)] = acc;
        }
    }
    Ok(())
}
