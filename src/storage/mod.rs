//! Output storage: writing rendered documents to the save directory.

mod produced;
mod sink;

pub use produced::ProducedFile;
pub use sink::FileSink;
