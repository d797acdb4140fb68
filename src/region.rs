use std::{io, ptr::{self, NonNull}, slice};

use libc::{MAP_ANON, MAP_FAILED, MAP_PRIVATE, PROT_READ, PROT_WRITE, c_void, mmap, munmap};
use log::{info, warn};

use crate::error::AllocError;

/// A private, zero-filled, read/write mapping obtained once from the OS.
///
/// The mapping is returned to the OS when the region is dropped.
pub struct Region {
  base: NonNull<u8>,
  size: usize,
}

impl Region {
  pub fn map(size: usize) -> Result<Self, AllocError> {
    if size == 0 {
      return Err(AllocError::InvalidSize);
    }

    let address = unsafe {
      mmap(
        ptr::null_mut(),
        size,
        PROT_READ | PROT_WRITE,
        MAP_PRIVATE | MAP_ANON,
        -1,
        0,
      )
    };

    if address == MAP_FAILED {
      let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
      return Err(AllocError::BackingStore { errno });
    }

    let base = NonNull::new(address as *mut u8).ok_or(AllocError::BackingStore { errno: 0 })?;

    info!("Mapped region of {} bytes at {:?}", size, base);

    Ok(Self { base, size })
  }

  pub fn base(&self) -> usize {
    self.base.as_ptr() as usize
  }

  pub fn size(&self) -> usize {
    self.size
  }

  /// Whether `[address, address + len)` lies inside the region.
  pub fn contains(
    &self,
    address: usize,
    len: usize,
  ) -> bool {
    match address.checked_add(len) {
      Some(end) => address >= self.base() && end <= self.base() + self.size,
      None => false,
    }
  }

  pub fn bytes(
    &self,
    address: usize,
    len: usize,
  ) -> Option<&[u8]> {
    if !self.contains(address, len) {
      return None;
    }

    let offset = address - self.base();
    Some(unsafe { slice::from_raw_parts(self.base.as_ptr().add(offset), len) })
  }

  pub fn bytes_mut(
    &mut self,
    address: usize,
    len: usize,
  ) -> Option<&mut [u8]> {
    if !self.contains(address, len) {
      return None;
    }

    let offset = address - self.base();
    Some(unsafe { slice::from_raw_parts_mut(self.base.as_ptr().add(offset), len) })
  }
}

impl Drop for Region {
  fn drop(&mut self) {
    let result = unsafe { munmap(self.base.as_ptr() as *mut c_void, self.size) };

    if result != 0 {
      warn!(
        "munmap of {} bytes at {:?} failed: {}",
        self.size,
        self.base,
        io::Error::last_os_error()
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_map_is_zero_filled() {
    let region = Region::map(100).unwrap();

    assert_eq!(region.size(), 100);
    assert!(region.bytes(region.base(), 100).unwrap().iter().all(|&b| b == 0));
  }

  #[test]
  fn test_map_zero_size() {
    assert!(matches!(Region::map(0), Err(AllocError::InvalidSize)));
  }

  #[test]
  fn test_map_failure() {
    assert!(matches!(
      Region::map(usize::MAX),
      Err(AllocError::BackingStore { .. })
    ));
  }

  #[test]
  fn test_bounds() {
    let mut region = Region::map(64).unwrap();
    let base = region.base();

    assert!(region.contains(base, 64));
    assert!(region.contains(base + 60, 4));
    assert!(!region.contains(base + 60, 5));
    assert!(!region.contains(base - 1, 1));
    assert!(!region.contains(usize::MAX, 2));

    region.bytes_mut(base + 8, 4).unwrap().copy_from_slice(&[1, 2, 3, 4]);
    assert_eq!(region.bytes(base + 7, 6).unwrap(), &[0, 1, 2, 3, 4, 0]);
    assert!(region.bytes_mut(base + 62, 4).is_none());
  }
}
