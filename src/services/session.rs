use crate::error::{Result, SnipError};
use crate::models::recognition::{RecognizedText, SnipOutcome};
use crate::models::rect::ScreenRectangle;
use crate::services::overlay::{OverlaySurface, SelectionOutcome, SelectionOverlay};
use crate::services::recognizer::CaptureRecognizer;
use crate::services::screen_capture::DisplayGeometry;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Region currently being recognized, if any
type InFlight = Arc<Mutex<Option<ScreenRectangle>>>;

/// Drives one overlay and at most one recognition at a time
///
/// Selection runs on the caller's (UI) thread. Capture and OCR run on the
/// runtime's blocking pool so the UI thread never waits on the backend.
pub struct SnipSession {
    recognizer: Arc<CaptureRecognizer>,
    overlay: SelectionOverlay,
    geometry: Arc<dyn DisplayGeometry>,
    runtime: Handle,
    in_flight: InFlight,
}

impl SnipSession {
    pub fn new(
        recognizer: Arc<CaptureRecognizer>,
        overlay: SelectionOverlay,
        geometry: Arc<dyn DisplayGeometry>,
        runtime: Handle,
    ) -> Self {
        Self {
            recognizer,
            overlay,
            geometry,
            runtime,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Session wired to xcap and Tesseract
    #[cfg(feature = "native")]
    pub fn native(config: &crate::models::config::AppConfig, runtime: Handle) -> Self {
        use crate::services::screen_capture::XcapScreen;

        Self::new(
            Arc::new(CaptureRecognizer::native(&config.ocr)),
            SelectionOverlay::new(&config.overlay),
            Arc::new(XcapScreen::new()),
            runtime,
        )
    }

    /// True while a recognition is pending
    pub fn is_busy(&self) -> bool {
        self.in_flight.lock().is_some()
    }

    pub fn in_flight_region(&self) -> Option<ScreenRectangle> {
        *self.in_flight.lock()
    }

    /// Run the selection overlay; blocks the calling thread until the
    /// gesture ends
    pub fn select<S: OverlaySurface + ?Sized>(&self, surface: &mut S) -> Result<SelectionOutcome> {
        if self.is_busy() {
            return Err(SnipError::RecognitionInFlight);
        }
        self.overlay.run(surface, self.geometry.as_ref())
    }

    /// Start capture and recognition of `rect` off the calling thread
    pub fn start_recognition(&self, rect: ScreenRectangle) -> Result<PendingRecognition> {
        let slot = InFlightSlot::claim(&self.in_flight, rect)?;
        let recognizer = Arc::clone(&self.recognizer);

        tracing::debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "Starting recognition"
        );

        let handle = self.runtime.spawn_blocking(move || {
            let _slot = slot;
            recognizer.capture_and_recognize(rect)
        });

        Ok(PendingRecognition {
            region: rect,
            handle,
        })
    }

    /// Recognize the region of a finished selection
    ///
    /// Safe to await from any task: only the wait for the blocking pool
    /// happens here.
    pub async fn recognize_selection(&self, selection: SelectionOutcome) -> SnipOutcome {
        let rect = match selection {
            SelectionOutcome::Selected(rect) => rect,
            SelectionOutcome::Cancelled => return SnipOutcome::Cancelled,
        };

        let outcome: SnipOutcome = match self.start_recognition(rect) {
            Ok(pending) => pending.wait().await.into(),
            Err(e) => SnipOutcome::Failed(e),
        };

        if let SnipOutcome::Failed(e) = &outcome {
            tracing::error!(error = %e, "Snip failed");
        }
        outcome
    }

    /// Select a region, then recognize it
    ///
    /// The selection half blocks on the surface's event loop, so drive this
    /// with [`Handle::block_on`] from the UI thread, never from a runtime
    /// worker. Async callers on a worker should run [`SnipSession::select`]
    /// on the UI thread and pass its result to
    /// [`SnipSession::recognize_selection`].
    pub async fn snip<S: OverlaySurface + ?Sized>(&self, surface: &mut S) -> SnipOutcome {
        match self.select(surface) {
            Ok(selection) => self.recognize_selection(selection).await,
            Err(e) => {
                tracing::error!(error = %e, "Selection failed");
                SnipOutcome::Failed(e)
            }
        }
    }
}

/// Claim on the session's single recognition slot, released on drop
struct InFlightSlot {
    slot: InFlight,
}

impl InFlightSlot {
    fn claim(slot: &InFlight, rect: ScreenRectangle) -> Result<Self> {
        let mut current = slot.lock();
        if current.is_some() {
            return Err(SnipError::RecognitionInFlight);
        }
        *current = Some(rect);

        Ok(Self {
            slot: Arc::clone(slot),
        })
    }
}

impl Drop for InFlightSlot {
    fn drop(&mut self) {
        *self.slot.lock() = None;
    }
}

/// A recognition running on the blocking pool
///
/// It cannot be cancelled; dropping this handle detaches the task, which
/// still runs to completion and then frees the session's slot.
pub struct PendingRecognition {
    region: ScreenRectangle,
    handle: JoinHandle<Result<RecognizedText>>,
}

impl PendingRecognition {
    pub fn region(&self) -> ScreenRectangle {
        self.region
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the recognized text
    pub async fn wait(self) -> Result<RecognizedText> {
        self.handle.await?
    }
}
