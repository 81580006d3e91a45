//! Entrovis - sliding-window entropy analysis of arbitrary byte streams.
//!
//! The library computes the metric entropy of every window of a byte stream
//! and maps the resulting sequence onto a fixed-size color field:
//! - Byte sources for memory, readers, memory-mapped files and closures
//! - A fixed-capacity sliding window advancing by an arbitrary stride
//! - Zeroth-order (byte frequency) entropy per window
//! - Min-max normalization into a discrete black-to-red gradient
//! - Background analysis with cooperative cancellation
//!
//! ```
//! use entrovis::analysis::compute_entropy_sequence;
//! use entrovis::source::SliceSource;
//! use entrovis::viz::GradientMapper;
//!
//! let data = [1u8, 2, 3, 4, 5, 6];
//! let sequence = compute_entropy_sequence(SliceSource::new(&data), 4, 2).unwrap();
//! assert_eq!(sequence.len(), 2);
//!
//! let canvas = GradientMapper::default().render(&sequence, 80, 60);
//! assert_eq!(canvas.cell_count(), 80 * 60);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod source;
pub mod util;
pub mod viz;
pub mod worker;

pub use analysis::{EntropyPipeline, EntropySequence};
pub use config::{AnalysisConfig, WindowParams};
pub use error::{EntropyError, Result};
pub use viz::{GradientMapper, PixelCanvas};
pub use worker::{analyze, Analysis, AnalysisWorker};
