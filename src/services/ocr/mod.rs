pub mod engine;
#[cfg(feature = "native")]
pub mod tesseract;
pub mod tessdata;

// Re-export main types
pub use engine::OcrBackend;
#[cfg(feature = "native")]
pub use self::tesseract::TesseractBackend;
pub use tessdata::{
    CandidateSource, InstallLocations, SystemLocations, TessdataLocation, TessdataResolver,
};
