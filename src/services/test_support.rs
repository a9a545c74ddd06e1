//! Stub collaborators shared by the service tests.

use crate::error::{Result, SnipError};
use crate::models::rect::ScreenRectangle;
use crate::services::ocr::engine::OcrBackend;
use crate::services::ocr::tessdata::{InstallLocations, TessdataResolver, TESSDATA_DIR_NAME};
use crate::services::screen_capture::CapturePrimitive;
use image::{Rgba, RgbaImage};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Capture primitive that counts calls and returns a white buffer
#[derive(Default)]
pub struct StubCapturer {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl StubCapturer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CapturePrimitive for StubCapturer {
    fn capture(&self, rect: ScreenRectangle) -> Result<RgbaImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SnipError::CaptureFailure("access denied".into()));
        }
        Ok(RgbaImage::from_pixel(
            rect.width,
            rect.height,
            Rgba([255, 255, 255, 255]),
        ))
    }
}

/// What the stub backend was asked to do
#[derive(Debug, Clone)]
pub struct BackendCall {
    pub width: u32,
    pub height: u32,
    pub data_dir: PathBuf,
    pub language: String,
}

/// Backend that echoes a fixed string, or fails
pub struct StubBackend {
    reply: std::result::Result<String, String>,
    pub calls: Mutex<Vec<BackendCall>>,
    /// Held for the duration of each call when set
    pub gate: Option<Arc<Mutex<()>>>,
}

impl StubBackend {
    pub fn echo(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated(text: &str, gate: Arc<Mutex<()>>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::echo(text)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl OcrBackend for StubBackend {
    fn recognize(&self, png: &[u8], data_dir: &Path, language: &str) -> Result<String> {
        let _held = self.gate.as_ref().map(|gate| gate.lock());

        // The backend must receive a decodable image
        let decoded = image::load_from_memory(png)
            .map_err(|e| SnipError::RecognitionFailure(e.to_string()))?;

        self.calls.lock().push(BackendCall {
            width: decoded.width(),
            height: decoded.height(),
            data_dir: data_dir.to_path_buf(),
            language: language.to_string(),
        });

        self.reply
            .clone()
            .map_err(SnipError::RecognitionFailure)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub struct FakeLocations {
    pub roots: Vec<PathBuf>,
    pub exe_dir: Option<PathBuf>,
}

impl InstallLocations for FakeLocations {
    fn install_roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn executable_dir(&self) -> Option<PathBuf> {
        self.exe_dir.clone()
    }
}

/// Scratch application directory, optionally with a bundled tessdata folder
pub struct TempApp {
    pub base: PathBuf,
}

impl TempApp {
    pub fn new(with_tessdata: bool) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let base = std::env::temp_dir().join(format!(
            "snip-ocr-app-test-{}-{}",
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(&base).unwrap();
        if with_tessdata {
            fs::create_dir_all(base.join(TESSDATA_DIR_NAME)).unwrap();
        }
        Self { base }
    }

    pub fn tessdata(&self) -> PathBuf {
        self.base.join(TESSDATA_DIR_NAME)
    }

    pub fn resolver(&self) -> TessdataResolver {
        TessdataResolver::new(
            Arc::new(FakeLocations {
                roots: Vec::new(),
                exe_dir: Some(self.base.clone()),
            }),
            None,
        )
    }
}

impl Drop for TempApp {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.base);
    }
}
