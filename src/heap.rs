use std::{process, ptr::NonNull};

use log::{debug, error, info};

use crate::{
  align::checked_align,
  error::AllocError,
  extent::Extent,
  extent_list::ExtentList,
  region::Region,
};

/// First-fit allocator over a single mapped region.
///
/// Bytes are tracked in two lists: the free list, sorted by address, and the
/// allocated list, newest first. Every byte of the region sits in exactly one
/// extent of one list. Adjacent free extents are never merged.
///
/// The allocator is neither `Send` nor `Sync`. Share it between threads only
/// behind a lock that guards the whole instance.
pub struct ExtentAllocator {
  region: Region,
  free: ExtentList,
  allocated: ExtentList,
}

impl ExtentAllocator {
  /// Maps `size` bytes and seeds the free list with one extent covering them.
  ///
  /// Terminates the process when the OS refuses the mapping, as nothing else
  /// can be done without it. See [`ExtentAllocator::try_init`] for the
  /// recoverable variant.
  pub fn init(size: usize) -> Self {
    match Self::try_init(size) {
      Ok(allocator) => allocator,
      Err(err) => {
        error!("Unable to initialize a region of {} bytes: {}", size, err);
        process::exit(1);
      }
    }
  }

  pub fn try_init(size: usize) -> Result<Self, AllocError> {
    let region = Region::map(size)?;

    let mut free = ExtentList::new();
    free.insert_head(region.base(), region.size())?;

    Ok(Self {
      region,
      free,
      allocated: ExtentList::new(),
    })
  }

  /// Reserves `size` bytes, rounded up to the granularity, from the lowest
  /// free extent that can hold them.
  pub fn reserve(
    &mut self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    if size == 0 {
      return Err(AllocError::InvalidSize);
    }

    let size = checked_align(size).ok_or(AllocError::OutOfMemory)?;

    let candidate = *self
      .free
      .find_by_min_size(size)
      .ok_or(AllocError::OutOfMemory)?;
    let ptr = NonNull::new(candidate.address as *mut u8).ok_or(AllocError::OutOfRegion)?;

    self.allocated.insert_head(candidate.address, size)?;

    if candidate.length == size {
      self.free.delete_by_address(candidate.address)?;
    } else if let Some(extent) = self.free.find_by_address_mut(candidate.address) {
      extent.address += size;
      extent.length -= size;
    }

    debug!(
      "Reserved {} bytes at {:#x} (free extent was {})",
      size, candidate.address, candidate
    );

    Ok(ptr)
  }

  /// Returns a reserved extent to the free list, in address order.
  ///
  /// Unknown addresses, including already released ones, are rejected with
  /// [`AllocError::NotFound`] and leave both lists untouched.
  pub fn release(
    &mut self,
    address: *mut u8,
  ) -> Result<(), AllocError> {
    let address = address as usize;

    let extent = *self
      .allocated
      .find_by_address(address)
      .ok_or(AllocError::NotFound)?;

    self.free.insert_ordered(extent.address, extent.length)?;
    self.allocated.delete_by_address(address)?;

    debug!("Released {}", extent);

    Ok(())
  }

  /// Drops all bookkeeping, then the region itself.
  pub fn teardown(mut self) {
    let free = self.free.clear();
    let allocated = self.allocated.clear();

    info!(
      "Tearing down region at {:#x}: {} free and {} allocated extents released",
      self.region.base(),
      free,
      allocated
    );
  }

  pub fn free_extents(&self) -> impl Iterator<Item = &Extent> {
    self.free.iter()
  }

  pub fn allocated_extents(&self) -> impl Iterator<Item = &Extent> {
    self.allocated.iter()
  }

  pub fn free_bytes(&self) -> usize {
    self.free.total_length()
  }

  pub fn allocated_bytes(&self) -> usize {
    self.allocated.total_length()
  }

  pub fn region_size(&self) -> usize {
    self.region.size()
  }

  pub fn base_address(&self) -> usize {
    self.region.base()
  }

  /// Reads `len` bytes starting at `address`, if they lie inside the region.
  pub fn bytes(
    &self,
    address: *const u8,
    len: usize,
  ) -> Option<&[u8]> {
    self.region.bytes(address as usize, len)
  }

  pub fn write_bytes(
    &mut self,
    address: *mut u8,
    data: &[u8],
  ) -> Result<(), AllocError> {
    let target = self
      .region
      .bytes_mut(address as usize, data.len())
      .ok_or(AllocError::OutOfRegion)?;

    target.copy_from_slice(data);

    Ok(())
  }

  pub fn print_free(&self) {
    for extent in self.free_extents() {
      println!("{}", extent);
    }
  }

  pub fn print_allocated(&self) {
    for extent in self.allocated_extents() {
      println!("{}", extent);
    }
  }

  /// Prints every allocated extent followed by its contents.
  pub fn print_mem(&self) {
    for extent in self.allocated_extents() {
      let Some(bytes) = self.region.bytes(extent.address, extent.length) else {
        continue;
      };

      let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
      println!("{:#x}: {}", extent.address, hex.join(" "));
    }
  }
}
