use std::ptr::NonNull;

use rsmalloc::ExtentAllocator;

const SIZE: usize = 100;

fn print_state(allocator: &ExtentAllocator) {
  println!("List of allocated blocks:");
  allocator.print_allocated();

  println!("List of free blocks:");
  allocator.print_free();

  println!("Contents of allocated memory:");
  allocator.print_mem();
}

/// Fills `len` bytes at `ptr` with the allocation's index, so each block is
/// easy to spot in the memory dump.
fn write_to_mem(
  allocator: &mut ExtentAllocator,
  ptr: NonNull<u8>,
  len: usize,
  value: u8,
) {
  let data = vec![value; len];
  if let Err(err) = allocator.write_bytes(ptr.as_ptr(), &data) {
    eprintln!("write to {:?} failed: {}", ptr, err);
  }
}

fn main() {
  env_logger::init();

  let mut allocator = ExtentAllocator::init(SIZE);
  let mut ptrs = Vec::new();

  // --------------------------------------------------------------------
  // 1) Reserve 7, 14 and 21 bytes: rounded to 8, 16 and 24.
  // --------------------------------------------------------------------
  for i in 0..3 {
    let num_bytes = (i + 1) * 7;

    match allocator.reserve(num_bytes) {
      Ok(ptr) => {
        write_to_mem(&mut allocator, ptr, num_bytes, i as u8);
        ptrs.push(ptr);
      }
      Err(err) => {
        eprintln!("reserve({}) failed: {}", num_bytes, err);
        return;
      }
    }
  }

  print_state(&allocator);

  // --------------------------------------------------------------------
  // 2) Release the middle block. The free list now has two extents.
  // --------------------------------------------------------------------
  println!("freeing {:?} result = {:?}", ptrs[1], allocator.release(ptrs[1].as_ptr()));

  print_state(&allocator);

  // --------------------------------------------------------------------
  // 3) Reserve exactly 16 bytes. The hole left in step 2 matches and must
  //    disappear from the free list instead of staying with size 0.
  // --------------------------------------------------------------------
  println!("adding a new block of exactly 16 bytes");
  match allocator.reserve(16) {
    Ok(ptr) => ptrs[1] = ptr,
    Err(err) => eprintln!("reserve(16) failed: {}", err),
  }

  print_state(&allocator);

  allocator.teardown();
}
