pub mod config;
pub mod ocr;
pub mod overlay;
pub mod recognizer;
pub mod screen_capture;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
