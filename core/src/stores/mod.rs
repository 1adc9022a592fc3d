//! Concrete session repository implementations.
//!
//! [`FileStore`] is the durable store used by real clients; it survives
//! process restarts the way browser local storage survives reloads.
//! [`MemoryStore`] keeps everything in process memory and doubles as the
//! test double for every crate in the workspace.

mod file;
#[cfg(feature = "test-utils")]
mod memory;

pub use file::FileStore;
#[cfg(feature = "test-utils")]
pub use memory::MemoryStore;
