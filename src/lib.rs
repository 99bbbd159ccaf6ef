pub mod container;
pub mod error;
pub mod header;
pub mod reverse;

pub use container::WavContainer;
pub use error::WavError;
pub use header::{WavHeader, HEADER_SIZE};
pub use reverse::{reverse_file, ReverseSummary};
