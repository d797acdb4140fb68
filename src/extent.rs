use std::fmt;

/// A contiguous run of bytes inside the managed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
  pub address: usize,
  pub length: usize,
}

impl Extent {
  pub fn new(
    address: usize,
    length: usize,
  ) -> Self {
    Self { address, length }
  }

  /// One past the last byte of the extent.
  pub fn end(&self) -> usize {
    self.address + self.length
  }

  /// Distance of the extent start from `base`.
  pub fn offset_from(
    &self,
    base: usize,
  ) -> usize {
    self.address - base
  }

  pub fn overlaps(
    &self,
    other: &Extent,
  ) -> bool {
    self.address < other.end() && other.address < self.end()
  }
}

impl fmt::Display for Extent {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "addr: {:#x}, size: {}", self.address, self.length)
  }
}
