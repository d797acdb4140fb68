use std::{error, fmt, io};

/// Errors reported by [`ExtentAllocator`](crate::ExtentAllocator) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
  /// A zero-byte reservation (or a zero-byte region) was requested.
  InvalidSize,
  /// No free extent is large enough for the rounded request.
  OutOfMemory,
  /// The address does not start a live allocation.
  NotFound,
  /// Bookkeeping storage for a list entry could not be obtained.
  /// The managed region may still have room.
  NodeAllocation,
  /// The operating system refused to map the backing region.
  BackingStore { errno: i32 },
  /// A byte range falls outside the managed region.
  OutOfRegion,
}

impl fmt::Display for AllocError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      AllocError::InvalidSize => write!(f, "invalid size: zero-byte request"),
      AllocError::OutOfMemory => write!(f, "out of memory: no free extent is large enough"),
      AllocError::NotFound => write!(f, "address is not a live allocation"),
      AllocError::NodeAllocation => write!(f, "could not allocate list bookkeeping"),
      AllocError::BackingStore { errno } => {
        write!(
          f,
          "mmap failed: {}",
          io::Error::from_raw_os_error(*errno)
        )
      }
      AllocError::OutOfRegion => write!(f, "byte range outside the managed region"),
    }
  }
}

impl error::Error for AllocError {}
