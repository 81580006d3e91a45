//! ENTROVIS - command-line front end.
//!
//! Analyzes a file (or stdin) with a sliding entropy window and writes the
//! resulting color field as a PNG image.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};

use entrovis::analysis::score_slice_parallel;
use entrovis::config::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRADIENT_STEPS, DEFAULT_WINDOW_SIZE,
    DEFAULT_WINDOW_STRIDE,
};
use entrovis::source::{MmapSource, ReaderSource};
use entrovis::util::{format_bytes, format_stats, Gradient};
use entrovis::viz::{save_png, GradientMapper};
use entrovis::{Analysis, AnalysisConfig, AnalysisWorker, EntropyError, Result};

#[derive(Parser)]
#[command(
    name = "entrovis",
    version,
    about = "Render the sliding-window entropy of a file as an image",
    long_about = "Scans the input with a sliding window, computes the metric entropy of every\n\
                  window and paints the sequence as a black (low) to red (high) gradient."
)]
struct Cli {
    /// Input file, or `-` to read stdin
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "entropy.png")]
    output: PathBuf,

    /// Window size in bytes
    #[arg(long, env = "ENTROVIS_WINDOW_SIZE", default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: u32,

    /// Bytes the window advances per step (1..=window size)
    #[arg(long, env = "ENTROVIS_WINDOW_STRIDE", default_value_t = DEFAULT_WINDOW_STRIDE)]
    window_stride: u32,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: u32,

    /// Number of discrete gradient colors
    #[arg(long, default_value_t = DEFAULT_GRADIENT_STEPS)]
    steps: usize,

    /// Score windows in parallel over a memory map instead of streaming
    #[arg(long)]
    parallel: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_window(self.window_size, self.window_stride)
            .with_canvas(self.width, self.height)
            .with_gradient_steps(self.steps)
    }

    fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                EntropyError::InvalidConfiguration(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    config.validate()?;

    let analysis = if cli.reads_stdin() {
        log::info!("Analyzing stdin");
        AnalysisWorker::spawn(ReaderSource::new(io::stdin()), config)?.wait()?
    } else {
        let source = MmapSource::open(&cli.input)?;
        log::info!(
            "Analyzing {} ({})",
            cli.input.display(),
            format_bytes(source.len() as u64)
        );
        if cli.parallel {
            analyze_parallel(&source, &config)?
        } else {
            AnalysisWorker::spawn(source, config)?.wait()?
        }
    };

    log::info!(
        "Analysis finished in {:.2}ms",
        analysis.elapsed.as_secs_f64() * 1000.0
    );
    save_png(&analysis.canvas, &cli.output)?;
    println!("{}", format_stats(analysis.sequence.stats().as_ref()));
    Ok(())
}

fn analyze_parallel(source: &MmapSource, config: &AnalysisConfig) -> Result<Analysis> {
    let started = Instant::now();
    let sequence = score_slice_parallel(source.as_bytes(), config.window.size, config.window.stride)?;

    let mapper = GradientMapper::new(Gradient::black_to_red(config.gradient_steps)?);
    let canvas = mapper.render(&sequence, config.canvas_width, config.canvas_height);

    Ok(Analysis {
        sequence,
        canvas,
        elapsed: started.elapsed(),
    })
}
