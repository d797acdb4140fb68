/// Rounding granularity, in bytes, of every reserved extent.
pub const GRANULARITY: usize = 8;

/// Rounds a byte count up to the next multiple of [`GRANULARITY`].
///
/// The expression must not overflow; use [`checked_align`] when the input
/// comes from a caller.
///
/// # Examples
///
/// ```rust
/// use rsmalloc::align;
///
/// assert_eq!(align!(1), 8);
/// assert_eq!(align!(8), 8);
/// assert_eq!(align!(13), 16);
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    ($value + $crate::align::GRANULARITY - 1) & !($crate::align::GRANULARITY - 1)
  };
}

/// Same as [`align!`], returning `None` when the rounded size does not fit
/// in a `usize`.
pub fn checked_align(value: usize) -> Option<usize> {
  value
    .checked_add(GRANULARITY - 1)
    .map(|v| v & !(GRANULARITY - 1))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_align() {
    let mut alignments = Vec::new();

    for i in 0..10 {
      let sizes = (GRANULARITY * i + 1)..=(GRANULARITY * (i + 1));

      let expected_alignment = GRANULARITY * (i + 1);

      alignments.push((sizes, expected_alignment));
    }

    for (sizes, expected) in alignments {
      for size in sizes {
        assert_eq!(expected, align!(size));
        assert_eq!(Some(expected), checked_align(size));
      }
    }
  }

  #[test]
  fn test_align_zero() {
    assert_eq!(0, align!(0usize));
  }

  #[test]
  fn test_checked_align_overflow() {
    assert_eq!(None, checked_align(usize::MAX));
    assert_eq!(None, checked_align(usize::MAX - 6));
    assert_eq!(Some(usize::MAX - 7), checked_align(usize::MAX - 7));
  }
}
