//! # rsmalloc - A First-Fit Extent Allocator
//!
//! This crate manages a single fixed-size region, mapped once with `mmap(2)`,
//! and serves variable-size requests out of it until the region is torn down.
//!
//! ## Overview
//!
//! Every byte of the region is described by exactly one **extent** (a start
//! address and a length) sitting in one of two lists:
//!
//! ```text
//!   Managed Region (100 bytes):
//!
//!   ┌────────┬────────────────┬────────────────────────┬──────────────────┐
//!   │ A: 8   │ F: 16          │ A: 24                  │ F: 52            │
//!   └────────┴────────────────┴────────────────────────┴──────────────────┘
//!   0        8                24                       48               100
//!
//!   Free list (ascending address):   [8, 16] -> [48, 52]
//!   Allocated list (newest first):   [24, 24] -> [0, 8]
//! ```
//!
//! - `reserve(n)` rounds `n` up to a multiple of 8, takes the first free
//!   extent large enough (the lowest one, since the free list is sorted) and
//!   carves the request off its front. An exact fit removes the free extent.
//! - `release(ptr)` moves the extent back into the free list at its address
//!   position. Neighbouring free extents are **not** merged.
//!
//! ## Crate Structure
//!
//! ```text
//!   rsmalloc
//!   ├── align        - Rounding granularity and the align! macro
//!   ├── error        - AllocError
//!   ├── extent       - Extent value type
//!   ├── extent_list  - ExtentList (insert, search, delete)
//!   ├── region       - Region, the mmap-backed store
//!   └── heap         - ExtentAllocator implementation
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rsmalloc::ExtentAllocator;
//!
//! let mut allocator = ExtentAllocator::init(100);
//!
//! let ptr = allocator.reserve(7).unwrap();
//! allocator.write_bytes(ptr.as_ptr(), b"rsmallo").unwrap();
//!
//! allocator.print_allocated();
//! allocator.release(ptr.as_ptr()).unwrap();
//!
//! allocator.teardown();
//! ```
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no synchronization; guard the whole allocator
//!   with a mutex or keep one instance per thread
//! - **Fixed region**: the region never grows or shrinks
//! - **No coalescing**: freed neighbours stay separate extents
//! - **8-byte granularity**: no other alignment guarantee
//! - **Unix-only**: requires `libc` and `mmap`
//!
//! ## Safety
//!
//! Reserving and releasing only touch bookkeeping and are safe. Pointers
//! handed out stay valid until they are released or the allocator is torn
//! down; dereferencing them is up to the caller.

pub mod align;
mod error;
mod extent;
mod extent_list;
mod heap;
mod region;

pub use error::AllocError;
pub use extent::Extent;
pub use extent_list::ExtentList;
pub use heap::ExtentAllocator;
pub use region::Region;
