use crate::error::{GemmError, Result};
use std::fmt;

/// Column-major layout of a dense matrix inside a flat buffer.
///
/// Element (row, col) lives at `row + col * ld`. The leading dimension `ld`
/// is the stride between consecutive columns; it equals `rows` for a packed
/// matrix and may be larger when the buffer is a window into a bigger
/// allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    rows: usize,
    cols: usize,
    ld: usize,
}

impl Layout {
    /// Layout with an explicit leading dimension.
    pub fn new(rows: usize, cols: usize, ld: usize) -> Self {
        Layout { rows, cols, ld }
    }

    /// Packed layout: `ld == rows`, clamped to 1 so an empty matrix still
    /// has a valid stride.
    pub fn packed(rows: usize, cols: usize) -> Self {
        Layout {
            rows,
            cols,
            ld: rows.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Leading dimension (column stride in elements).
    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Linear offset of (row, col). Bounds are not checked.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row + col * self.ld
    }

    /// Minimum buffer length able to hold every element of this layout.
    ///
    /// The last column needs only `rows` slots, so a strided window does not
    /// require trailing padding after its final element.
    pub fn required_len(&self) -> Result<usize> {
        if self.is_empty() {
            return Ok(0);
        }
        (self.cols - 1)
            .checked_mul(self.ld)
            .and_then(|v| v.checked_add(self.rows))
            .ok_or(GemmError::InvalidDimension {
                what: "cols",
                value: self.cols,
                reason: "buffer size overflows usize",
            })
    }

    /// Checks that the leading dimension covers a full column and that a
    /// buffer of `len` elements is large enough for this layout.
    pub fn validate(&self, operand: &'static str, len: usize) -> Result<()> {
        if self.ld < self.rows.max(1) {
            return Err(GemmError::InvalidDimension {
                what: "ld",
                value: self.ld,
                reason: "leading dimension smaller than row count",
            });
        }
        let required = self.required_len()?;
        if len < required {
            return Err(GemmError::BufferTooSmall {
                operand,
                required,
                got: len,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} x {}, ld={}]", self.rows, self.cols, self.ld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_offsets() {
        let l = Layout::packed(2, 3);
        assert_eq!(l.ld(), 2);
        assert_eq!(l.offset(0, 0), 0);
        assert_eq!(l.offset(1, 0), 1);
        assert_eq!(l.offset(0, 1), 2);
        assert_eq!(l.offset(1, 2), 5);
        assert_eq!(l.required_len().unwrap(), 6);
    }

    #[test]
    fn test_strided_required_len() {
        // 2x3 window with column stride 4: last column ends at offset 2*4 + 1.
        let l = Layout::new(2, 3, 4);
        assert_eq!(l.offset(1, 2), 9);
        assert_eq!(l.required_len().unwrap(), 10);
    }

    #[test]
    fn test_empty_layout() {
        assert_eq!(Layout::packed(0, 5).required_len().unwrap(), 0);
        assert_eq!(Layout::packed(0, 5).ld(), 1);
        assert_eq!(Layout::packed(5, 0).required_len().unwrap(), 0);
        assert!(Layout::packed(0, 0).validate("a", 0).is_ok());
    }

    #[test]
    fn test_validate_short_buffer() {
        let err = Layout::packed(2, 2).validate("b", 3).unwrap_err();
        assert_eq!(
            err,
            GemmError::BufferTooSmall {
                operand: "b",
                required: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_validate_bad_ld() {
        let err = Layout::new(3, 2, 2).validate("a", 100).unwrap_err();
        assert!(matches!(err, GemmError::InvalidDimension { what: "ld", .. }));
        // Zero rows still needs ld >= 1.
        assert!(Layout::new(0, 2, 0).validate("a", 0).is_err());
    }

    #[test]
    fn test_overflow() {
        let l = Layout::new(usize::MAX, 3, usize::MAX);
        assert!(matches!(
            l.required_len(),
            Err(GemmError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Layout::new(2, 3, 4).to_string(), "[2 x 3, ld=4]");
    }
}
