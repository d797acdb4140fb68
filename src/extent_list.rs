use std::collections::{VecDeque, vec_deque};

use log::trace;

use crate::{error::AllocError, extent::Extent};

/// An owned sequence of extents, head first.
///
/// The free list keeps it sorted by ascending address through
/// [`ExtentList::insert_ordered`]; the allocated list only ever grows at the
/// head. Every search is a linear scan in list order.
#[derive(Debug, Default)]
pub struct ExtentList {
  extents: VecDeque<Extent>,
}

impl ExtentList {
  pub fn new() -> Self {
    Self {
      extents: VecDeque::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.extents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.extents.is_empty()
  }

  pub fn iter(&self) -> vec_deque::Iter<'_, Extent> {
    self.extents.iter()
  }

  /// Sum of the lengths of every extent in the list.
  pub fn total_length(&self) -> usize {
    self.extents.iter().map(|e| e.length).sum()
  }

  /// Makes room for one more entry, so the insertion that follows cannot
  /// fail halfway.
  fn reserve_entry(&mut self) -> Result<(), AllocError> {
    self
      .extents
      .try_reserve(1)
      .map_err(|_| AllocError::NodeAllocation)
  }

  pub fn insert_head(
    &mut self,
    address: usize,
    length: usize,
  ) -> Result<(), AllocError> {
    self.reserve_entry()?;
    self.extents.push_front(Extent::new(address, length));
    Ok(())
  }

  /// Inserts keeping ascending address order. An entry with an equal
  /// address ends up after the new one.
  pub fn insert_ordered(
    &mut self,
    address: usize,
    length: usize,
  ) -> Result<(), AllocError> {
    if self.extents.front().is_none_or(|head| address <= head.address) {
      return self.insert_head(address, length);
    }

    self.reserve_entry()?;

    let index = self.extents.partition_point(|e| e.address < address);
    trace!("insert_ordered({:#x}, {}) at index {}", address, length, index);
    self.extents.insert(index, Extent::new(address, length));

    Ok(())
  }

  /// First extent, in list order, holding at least `size` bytes.
  pub fn find_by_min_size(
    &self,
    size: usize,
  ) -> Option<&Extent> {
    let found = self.extents.iter().find(|e| e.length >= size);
    trace!("find_by_min_size({}) -> {:?}", size, found);
    found
  }

  pub fn find_by_address(
    &self,
    address: usize,
  ) -> Option<&Extent> {
    self.extents.iter().find(|e| e.address == address)
  }

  pub fn find_by_address_mut(
    &mut self,
    address: usize,
  ) -> Option<&mut Extent> {
    self.extents.iter_mut().find(|e| e.address == address)
  }

  /// Unlinks the extent starting at `address` and hands it back.
  pub fn delete_by_address(
    &mut self,
    address: usize,
  ) -> Result<Extent, AllocError> {
    let index = self
      .extents
      .iter()
      .position(|e| e.address == address)
      .ok_or(AllocError::NotFound)?;

    self.extents.remove(index).ok_or(AllocError::NotFound)
  }

  /// Drops every entry, returning how many there were.
  pub fn clear(&mut self) -> usize {
    let count = self.extents.len();
    self.extents.clear();
    count
  }
}

impl<'a> IntoIterator for &'a ExtentList {
  type Item = &'a Extent;
  type IntoIter = vec_deque::Iter<'a, Extent>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
