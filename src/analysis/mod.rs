//! Windowed entropy analysis of byte streams.
//!
//! - `window` - fixed-capacity sliding window fed by a [`ByteSource`](crate::source::ByteSource)
//! - `entropy` - Shannon and metric entropy of a single window
//! - `pipeline` - drives window and scorer to an [`EntropySequence`]
//! - `parallel` - rayon-backed scoring of in-memory data

pub mod entropy;
pub mod parallel;
pub mod pipeline;
pub mod window;

pub use entropy::{byte_histogram, metric_entropy, metric_entropy_checked, shannon_entropy};
pub use parallel::{score_slice_parallel, window_count};
pub use pipeline::{compute_entropy_sequence, EntropyPipeline, EntropySequence, SequenceStats};
pub use window::ByteWindow;
