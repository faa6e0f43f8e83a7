use std::sync::Arc;

use gospoil_domain::{
    generate_stub, FallbackReason, MovieDetail, Summary, SummaryBounds, SummaryOrigin,
    EMPTY_PLOT_MESSAGE, FALLBACK_STUB_TITLE,
};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{ApplicationError, EngineFactory, SummarizationEngine};

/// Produces summaries through a lazily acquired engine, falling back to the
/// deterministic stub whenever the engine is missing or fails.
pub struct SummaryGenerator {
    factory: Box<dyn EngineFactory>,
    engine: Mutex<Option<Arc<dyn SummarizationEngine>>>,
    bounds: SummaryBounds,
}

impl SummaryGenerator {
    pub fn new(factory: Box<dyn EngineFactory>) -> Self {
        Self::with_bounds(factory, SummaryBounds::default())
    }

    pub fn with_bounds(factory: Box<dyn EngineFactory>, bounds: SummaryBounds) -> Self {
        Self {
            factory,
            engine: Mutex::new(None),
            bounds,
        }
    }

    pub fn summarize(&self, plot_text: &str) -> Summary {
        self.summarize_or(plot_text, || generate_stub(FALLBACK_STUB_TITLE, None, None))
    }

    /// Like [`Self::summarize`], but the fallback stub is seeded from the
    /// movie's own title and year.
    pub fn summarize_movie(&self, detail: &MovieDetail) -> Summary {
        self.summarize_or(&detail.plot_text, || {
            generate_stub(&detail.title, Some(&detail.year), None)
        })
    }

    fn summarize_or(&self, plot_text: &str, stub: impl FnOnce() -> String) -> Summary {
        let plot_text = plot_text.trim();
        if plot_text.is_empty() {
            return Summary {
                text: EMPTY_PLOT_MESSAGE.to_string(),
                origin: SummaryOrigin::EmptyPlot,
            };
        }

        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(error) => {
                warn!(%error, "summarization engine unavailable, using stub");
                return Summary {
                    text: stub(),
                    origin: SummaryOrigin::Stub(FallbackReason::EngineUnavailable(
                        error.to_string(),
                    )),
                };
            }
        };

        match engine.summarize(plot_text, self.bounds) {
            Ok(text) => Summary {
                text: text.trim().to_string(),
                origin: SummaryOrigin::Model,
            },
            Err(error) => {
                warn!(%error, "summarization engine failed, using stub");
                Summary {
                    text: stub(),
                    origin: SummaryOrigin::Stub(FallbackReason::EngineFailed(error.to_string())),
                }
            }
        }
    }

    /// Single-flight acquisition: the lock is held across `acquire`, and only
    /// a successful engine is kept.
    fn engine(&self) -> Result<Arc<dyn SummarizationEngine>, ApplicationError> {
        let mut slot = self.engine.lock();
        if let Some(engine) = slot.as_ref() {
            return Ok(Arc::clone(engine));
        }
        debug!("acquiring summarization engine");
        let engine = self.factory.acquire()?;
        *slot = Some(Arc::clone(&engine));
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gospoil_domain::ExternalId;

    use super::*;

    struct EchoEngine {
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    impl SummarizationEngine for EchoEngine {
        fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApplicationError::Summarizer("model crashed".to_string()));
            }
            Ok(format!("  {} [{}-{}]\n", text, bounds.min_length, bounds.max_length))
        }
    }

    struct CountingFactory {
        available: bool,
        engine_fails: bool,
        acquisitions: Arc<AtomicUsize>,
        engine_calls: Arc<AtomicUsize>,
    }

    impl CountingFactory {
        fn new(available: bool, engine_fails: bool) -> Self {
            Self {
                available,
                engine_fails,
                acquisitions: Arc::new(AtomicUsize::new(0)),
                engine_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl EngineFactory for CountingFactory {
        fn acquire(&self) -> Result<Arc<dyn SummarizationEngine>, ApplicationError> {
            self.acquisitions.fetch_add(1, Ordering::SeqCst);
            if !self.available {
                return Err(ApplicationError::Summarizer("no model".to_string()));
            }
            Ok(Arc::new(EchoEngine {
                fail: self.engine_fails,
                calls: Arc::clone(&self.engine_calls),
            }))
        }
    }

    fn detail(plot: &str) -> MovieDetail {
        MovieDetail {
            external_id: ExternalId::new("tt0133093").expect("id"),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            genre: String::new(),
            director: String::new(),
            actors: String::new(),
            rating: String::new(),
            plot_text: plot.to_string(),
            poster_url: String::new(),
        }
    }

    #[test]
    fn empty_plot_never_touches_the_engine() {
        let factory = CountingFactory::new(true, false);
        let acquisitions = Arc::clone(&factory.acquisitions);
        let generator = SummaryGenerator::new(Box::new(factory));

        let summary = generator.summarize("");
        assert_eq!(summary.text, EMPTY_PLOT_MESSAGE);
        assert_eq!(summary.origin, SummaryOrigin::EmptyPlot);
        assert_eq!(acquisitions.load(Ordering::SeqCst), 0);

        let unavailable = SummaryGenerator::new(Box::new(CountingFactory::new(false, false)));
        assert_eq!(unavailable.summarize("").text, EMPTY_PLOT_MESSAGE);
    }

    #[test]
    fn model_output_is_trimmed_and_engine_is_memoised() {
        let factory = CountingFactory::new(true, false);
        let acquisitions = Arc::clone(&factory.acquisitions);
        let calls = Arc::clone(&factory.engine_calls);
        let generator = SummaryGenerator::new(Box::new(factory));

        let first = generator.summarize("Neo wakes up.");
        let second = generator.summarize("Neo wakes up.");
        assert_eq!(first.text, "Neo wakes up. [60-180]");
        assert_eq!(first.origin, SummaryOrigin::Model);
        assert_eq!(first, second);
        assert_eq!(acquisitions.load(Ordering::SeqCst), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unavailable_engine_falls_back_to_generic_stub_and_retries_acquisition() {
        let factory = CountingFactory::new(false, false);
        let acquisitions = Arc::clone(&factory.acquisitions);
        let generator = SummaryGenerator::new(Box::new(factory));

        let summary = generator.summarize("Neo wakes up.");
        assert_eq!(summary.text, generate_stub("Movie", None, None));
        assert!(matches!(
            summary.origin,
            SummaryOrigin::Stub(FallbackReason::EngineUnavailable(_))
        ));

        generator.summarize("Neo wakes up.");
        assert_eq!(acquisitions.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failing_engine_falls_back_to_movie_stub() {
        let generator = SummaryGenerator::new(Box::new(CountingFactory::new(true, true)));

        let summary = generator.summarize_movie(&detail("Neo wakes up."));
        assert_eq!(summary.text, generate_stub("The Matrix", Some("1999"), None));
        assert_eq!(
            summary.origin,
            SummaryOrigin::Stub(FallbackReason::EngineFailed(
                "summarizer error: model crashed".to_string()
            ))
        );
    }
}
