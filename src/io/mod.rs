//! I/O for loading recorded temperature feeds.

pub mod file_loader;
pub mod async_loader;

pub use file_loader::LoadingState;
pub use async_loader::{AsyncLoader, LoadResult};
