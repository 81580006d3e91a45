//! End-to-end checks over real files: source adapters, pipeline, mapper.

use std::fs::File;
use std::io::Write;

use entrovis::analysis::{compute_entropy_sequence, score_slice_parallel};
use entrovis::source::{MmapSource, ReaderSource, SliceSource};
use entrovis::util::Rgb;
use entrovis::viz::{BandLayout, GradientMapper};
use entrovis::{analyze, AnalysisConfig, EntropyError};

fn write_temp(data: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// Zero padding, then "random-looking" bytes, then text.
fn mixed_content() -> Vec<u8> {
    let mut data = vec![0u8; 2048];
    let mut state = 0x1234_5678u32;
    for _ in 0..2048 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.push(state as u8);
    }
    data.extend(b"the quick brown fox jumps over the lazy dog ".repeat(40));
    data
}

// =============================================================================
// SOURCES
// =============================================================================

#[test]
fn test_reader_and_mmap_sources_agree() {
    let data = mixed_content();
    let file = write_temp(&data);

    let from_reader =
        compute_entropy_sequence(ReaderSource::new(File::open(file.path()).unwrap()), 64, 16)
            .unwrap();
    let from_mmap = compute_entropy_sequence(MmapSource::open(file.path()).unwrap(), 64, 16).unwrap();
    let from_slice = compute_entropy_sequence(SliceSource::new(&data), 64, 16).unwrap();

    assert_eq!(from_reader, from_mmap);
    assert_eq!(from_reader, from_slice);
}

#[test]
fn test_parallel_matches_streaming_on_file() {
    let data = mixed_content();
    let file = write_temp(&data);
    let source = MmapSource::open(file.path()).unwrap();

    let parallel = score_slice_parallel(source.as_bytes(), 32, 1).unwrap();
    let streamed = compute_entropy_sequence(source, 32, 1).unwrap();
    assert_eq!(parallel, streamed);
    assert_eq!(streamed.len(), data.len() - 32 + 1);
}

#[test]
fn test_empty_file() {
    let file = write_temp(&[]);
    let config = AnalysisConfig::default().with_canvas(16, 8);
    let analysis = analyze(MmapSource::open(file.path()).unwrap(), &config).unwrap();
    assert!(analysis.sequence.is_empty());
    assert!(analysis.canvas.pixels().iter().all(|&p| p == Rgb::BLACK));
}

#[test]
fn test_missing_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let result = MmapSource::open(dir.path().join("missing.bin"));
    assert!(matches!(result, Err(EntropyError::IoFailure(_))));
}

// =============================================================================
// ENTROPY PROPERTIES
// =============================================================================

#[test]
fn test_padding_scores_lower_than_noise() {
    let data = mixed_content();
    let seq = compute_entropy_sequence(SliceSource::new(&data), 256, 256).unwrap();
    let values = seq.values();

    // First 8 windows are pure zero padding, next 8 are noise.
    assert!(values[..8].iter().all(|&v| v == 0.0));
    assert!(values[8..16].iter().all(|&v| v > 0.02));
    assert!(values.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_uniform_window_metric_entropy() {
    let data: Vec<u8> = (0..=255).collect();
    let seq = compute_entropy_sequence(SliceSource::new(&data), 256, 1).unwrap();
    assert_eq!(seq.len(), 1);
    assert!((seq.values()[0] - 0.03125).abs() < 1e-12);
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn test_full_run_canvas_shows_structure() {
    let data = mixed_content();
    let config = AnalysisConfig::default()
        .with_window(128, 64)
        .with_canvas(100, 50);
    let analysis = analyze(SliceSource::new(&data), &config).unwrap();

    assert_eq!(analysis.canvas.width(), 100);
    assert_eq!(analysis.canvas.height(), 50);
    // Padding at the start is the minimum, so the first row is black.
    assert!(analysis.canvas.row(0).unwrap().iter().all(|&p| p == Rgb::BLACK));
    assert!(analysis.canvas.pixels().iter().any(|&p| p == Rgb::RED));
    assert!(analysis.canvas.distinct_colors() > 2);
}

#[test]
fn test_band_layout_matches_rendered_canvas() {
    let values: Vec<f64> = vec![0.0, 1.0, 0.0];
    let sequence = entrovis::EntropySequence::from_values(values).unwrap();
    let canvas = GradientMapper::default().render(&sequence, 5, 2);

    let layout = BandLayout::new(5, 2, 3);
    let red = layout.band(1);
    for cell in 0..10u32 {
        let expected = if red.contains(&u64::from(cell)) {
            Rgb::RED
        } else {
            Rgb::BLACK
        };
        assert_eq!(canvas.get(cell % 5, cell / 5), Some(expected), "cell {cell}");
    }
}
