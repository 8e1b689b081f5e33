//! Global allocator for the binary.
//!
//! Batch conversion allocates one short `String` per line on every worker
//! thread; mimalloc handles that pattern better than the system allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
