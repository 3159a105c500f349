//! Display sinks
//!
//! A sink receives the finished frame and performs the physical refresh. The
//! core only ships a PNG writer; e-paper drivers live outside this crate.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

use crate::error::SinkError;

/// Receiver of finished frames
pub trait DisplaySink {
    fn show(&mut self, frame: &RgbImage) -> Result<(), SinkError>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show(&mut self, frame: &RgbImage) -> Result<(), SinkError> {
        (**self).show(frame)
    }
}

/// Writes every frame to the same PNG file
#[derive(Debug, Clone)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySink for PngFileSink {
    fn show(&mut self, frame: &RgbImage) -> Result<(), SinkError> {
        save_png(frame, &self.path)?;
        info!(
            "Frame {}x{} written to {}",
            frame.width(),
            frame.height(),
            self.path.display()
        );
        Ok(())
    }
}

/// Encode `frame` as PNG at `path`, creating missing parent directories
pub fn save_png(frame: &RgbImage, path: &Path) -> Result<(), SinkError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SinkError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    frame
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| SinkError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn writes_png_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("frame.png");
        let frame = RgbImage::from_pixel(8, 4, Rgb([10, 20, 30]));

        PngFileSink::new(&path).show(&frame).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (8, 4));
        assert_eq!(decoded.get_pixel(3, 2), &Rgb([10, 20, 30]));
    }

    #[test]
    fn unwritable_parent_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file, not a directory").unwrap();

        let frame = RgbImage::new(2, 2);
        let err = PngFileSink::new(blocker.join("frame.png"))
            .show(&frame)
            .unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }
}
