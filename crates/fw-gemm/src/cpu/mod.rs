pub mod gemm;

use crate::backend::GemmBackend;
use crate::element::Element;
use crate::error::Result;

/// Pure-Rust CPU backend.
///
/// Runs the naive triple loop from [`gemm::gemm_strided`] on the calling
/// thread. Intended as the reference implementation and fallback.
#[derive(Debug, Clone, Copy)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> GemmBackend<T> for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

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
    ) -> Result<()> {
        gemm::gemm_strided(m, n, k, a, lda, b, ldb, c, ldc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(GemmBackend::<f32>::name(&CpuBackend::new()), "cpu");
    }

    #[test]
    fn test_dyn_dispatch() {
        let backend: &dyn GemmBackend<i32> = &CpuBackend;
        let a = [1, 3, 2, 4];
        let b = [5, 7, 6, 8];
        let mut c = [0; 4];
        backend.gemm(2, 2, 2, &a, 2, &b, 2, &mut c, 2).unwrap();
        assert_eq!(c, [19, 43, 22, 50]);
    }

    #[test]
    fn test_errors_pass_through() {
        let backend = CpuBackend::default();
        let mut c = [0.0f32; 1];
        let r = GemmBackend::<f32>::gemm(&backend, 2, 2, 2, &[1.0; 4], 2, &[1.0; 4], 2, &mut c, 2);
        assert!(r.is_err());
    }
}
