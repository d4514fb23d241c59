mod file_loader;
mod summarizer;

pub use file_loader::{FileLoader, FileLoaderError};
pub use summarizer::{Summarizer, SummarizerError};
