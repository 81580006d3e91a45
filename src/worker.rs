//! Background analysis worker.
//!
//! Runs the entropy pipeline and the gradient mapper on a dedicated thread and
//! hands the finished [`Analysis`] back exactly once over a channel, so a
//! front end never shares a half-written sequence with the computation.
//! Cancellation is cooperative: the source is wrapped in a
//! [`CancellableSource`] and the next read after [`AnalysisWorker::cancel`]
//! aborts the run with [`EntropyError::Cancelled`].

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::analysis::{EntropyPipeline, EntropySequence};
use crate::config::AnalysisConfig;
use crate::error::{EntropyError, Result};
use crate::source::{ByteSource, CancelToken, CancellableSource};
use crate::util::color::Gradient;
use crate::viz::{GradientMapper, PixelCanvas};

/// Result of one complete run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub sequence: EntropySequence,
    pub canvas: PixelCanvas,
    pub elapsed: Duration,
}

/// Run pipeline and mapper synchronously on the current thread.
pub fn analyze<S: ByteSource>(source: S, config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;
    let started = Instant::now();

    let pipeline = EntropyPipeline::with_params(config.window)?;
    let sequence = pipeline.run(source)?;

    if let Some(stats) = sequence.stats() {
        log::info!("Average metric entropy: {}", stats.mean);
    }

    let mapper = GradientMapper::new(Gradient::black_to_red(config.gradient_steps)?);
    let canvas = mapper.render(&sequence, config.canvas_width, config.canvas_height);

    Ok(Analysis {
        sequence,
        canvas,
        elapsed: started.elapsed(),
    })
}

/// Handle to an analysis running on a background thread.
pub struct AnalysisWorker {
    receiver: Receiver<Result<Analysis>>,
    token: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl AnalysisWorker {
    /// Validate `config` and start analyzing `source` in the background.
    ///
    /// Configuration errors are reported here, before the thread is spawned.
    pub fn spawn<S>(source: S, config: AnalysisConfig) -> Result<Self>
    where
        S: ByteSource + Send + 'static,
    {
        config.validate()?;

        let token = CancelToken::new();
        let source = CancellableSource::new(source, token.clone());
        let (tx, rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("entropy-analysis".to_string())
            .spawn(move || {
                let outcome = analyze(source, &config);
                // Receiver gone means nobody wants the result any more.
                let _ = tx.send(outcome);
            })?;

        Ok(Self {
            receiver: rx,
            token,
            handle: Some(handle),
        })
    }

    /// Ask the worker to stop at its next read.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Non-blocking poll. `None` while the analysis is still running.
    pub fn try_result(&mut self) -> Option<Result<Analysis>> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.join();
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(Err(EntropyError::IllegalState(
                    "analysis thread exited without a result",
                )))
            }
        }
    }

    /// Block until the analysis finishes.
    pub fn wait(mut self) -> Result<Analysis> {
        let outcome = self.receiver.recv().unwrap_or(Err(EntropyError::IllegalState(
            "analysis thread exited without a result",
        )));
        self.join();
        outcome
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Analysis thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FnSource, ReaderSource};
    use std::io::Cursor;

    #[test]
    fn test_analyze_produces_sequence_and_canvas() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i % 7) as u8).collect();
        let config = AnalysisConfig::default().with_canvas(40, 30);
        let analysis = analyze(ReaderSource::new(Cursor::new(data)), &config).unwrap();
        assert_eq!(analysis.sequence.len(), 4096 - 32 + 1);
        assert_eq!(analysis.canvas.cell_count(), 1200);
    }

    #[test]
    fn test_worker_delivers_result_once() {
        let data = vec![0xABu8; 1000];
        let config = AnalysisConfig::default().with_window(64, 8).with_canvas(10, 10);
        let worker = AnalysisWorker::spawn(ReaderSource::new(Cursor::new(data)), config).unwrap();
        let analysis = worker.wait().unwrap();
        assert!(analysis.sequence.iter().all(|v| v == 0.0));
        assert_eq!(analysis.canvas.distinct_colors(), 1);
    }

    #[test]
    fn test_worker_rejects_bad_config_before_spawning() {
        let config = AnalysisConfig::default().with_window(10, 11);
        let result = AnalysisWorker::spawn(ReaderSource::new(Cursor::new(vec![1u8])), config);
        assert!(matches!(result, Err(EntropyError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_worker_cancellation() {
        // Endless source: the run only ends through cancellation.
        let source = FnSource(|| -> Result<Option<u8>> {
            thread::sleep(Duration::from_micros(10));
            Ok(Some(0x5A))
        });
        let mut worker = AnalysisWorker::spawn(source, AnalysisConfig::default()).unwrap();
        assert!(worker.try_result().is_none());

        worker.cancel();
        let err = worker.wait().unwrap_err();
        assert!(err.is_cancelled());
    }
}
