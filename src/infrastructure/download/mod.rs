//! Download infrastructure module

mod fs;

pub use fs::FsDownloadSink;
