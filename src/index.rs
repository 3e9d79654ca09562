use crate::error::{Error, Result};

/// Resolves a signed position against a list of `len` elements.
///
/// Negative positions count from the end. The result always lies in `[0, len)`.
pub(crate) fn normalize(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };

    match resolved {
        Some(resolved) if resolved < len => Ok(resolved),
        _ => Err(Error::IndexOutOfRange { index, len }),
    }
}

/// Resolves an insertion point, which may also be one past the last element.
///
/// Equivalent to normalizing against `len + 1` slots, so `-1` addresses the
/// position after the current last element.
pub(crate) fn normalize_insert(index: isize, len: usize) -> Result<usize> {
    normalize(index, len + 1).map_err(|_| Error::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_insert};
    use crate::Error;

    #[test]
    fn normalize_accepts_positions_in_bounds() {
        assert_eq!(normalize(0, 3), Ok(0));
        assert_eq!(normalize(2, 3), Ok(2));
        assert_eq!(normalize(-1, 3), Ok(2));
        assert_eq!(normalize(-3, 3), Ok(0));
    }

    #[test]
    fn normalize_rejects_positions_out_of_bounds() {
        assert_eq!(
            normalize(3, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            normalize(-4, 3),
            Err(Error::IndexOutOfRange { index: -4, len: 3 })
        );
        assert_eq!(
            normalize(0, 0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            normalize(-1, 0),
            Err(Error::IndexOutOfRange { index: -1, len: 0 })
        );
    }

    #[test]
    fn normalize_handles_extreme_values() {
        assert!(normalize(isize::MIN, usize::MAX).is_ok());
        assert!(normalize(isize::MIN, 10).is_err());
        assert!(normalize(isize::MAX, 10).is_err());
    }

    #[test]
    fn normalize_insert_allows_one_past_the_end() {
        assert_eq!(normalize_insert(0, 0), Ok(0));
        assert_eq!(normalize_insert(3, 3), Ok(3));
        assert_eq!(normalize_insert(-1, 3), Ok(3));
        assert_eq!(normalize_insert(-4, 3), Ok(0));
        assert_eq!(normalize_insert(-1, 0), Ok(0));
    }

    #[test]
    fn normalize_insert_reports_the_current_length() {
        assert_eq!(
            normalize_insert(4, 3),
            Err(Error::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            normalize_insert(-5, 3),
            Err(Error::IndexOutOfRange { index: -5, len: 3 })
        );
    }
}
