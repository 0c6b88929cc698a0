// Capture targets: whatever provides the rendered visual tree for PDF export.
// The service only ever captures from an uploaded full-page PNG snapshot.

use std::io::Cursor;

use async_trait::async_trait;
use image::{imageops::FilterType, ImageReader, Limits, RgbaImage};

use super::pdf::PdfFailure;

/// Largest raster a capture may produce: eight A4 pages at 2400 px wide.
pub const MAX_RASTER_PIXELS: u64 = 2400 * 3394 * 8;
const BYTES_PER_PIXEL: u64 = 4;

/// A rendered page that can be laid out at a given width and rasterized.
///
/// `width` is the logical layout width; `None` means the target's natural width.
#[async_trait]
pub trait CaptureTarget: Send {
    fn width(&self) -> Option<u32>;

    fn set_width(&mut self, width: Option<u32>);

    /// Rasterizes the target at `scale` device pixels per logical unit.
    async fn rasterize(&mut self, scale: f32) -> Result<RgbaImage, PdfFailure>;
}

/// Capture target backed by a decoded screenshot of the rendered portfolio.
///
/// Changing the width rescales the snapshot proportionally; no reflow happens.
pub struct ImageCapture {
    snapshot: RgbaImage,
    width: Option<u32>,
}

impl ImageCapture {
    /// Decodes an uploaded snapshot, refusing anything larger than the raster budget.
    pub fn from_png(bytes: &[u8]) -> Result<Self, PdfFailure> {
        let snapshot = decode_bounded(bytes, MAX_RASTER_PIXELS)?;
        if snapshot.width() == 0 || snapshot.height() == 0 {
            return Err(PdfFailure::Rasterize("snapshot is empty".to_string()));
        }
        Ok(Self {
            snapshot,
            width: None,
        })
    }

    #[cfg(test)]
    pub fn from_image(snapshot: RgbaImage) -> Self {
        Self {
            snapshot,
            width: None,
        }
    }
}

/// Reads the header first so oversized uploads are refused before any pixel
/// buffer is allocated.
fn decode_bounded(bytes: &[u8], max_pixels: u64) -> Result<RgbaImage, PdfFailure> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    if u64::from(width) * u64::from(height) > max_pixels {
        return Err(PdfFailure::Rasterize(format!(
            "snapshot of {width}x{height} exceeds {max_pixels} pixels"
        )));
    }

    let mut limits = Limits::default();
    limits.max_alloc = Some(max_pixels * BYTES_PER_PIXEL);
    let mut reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    reader.limits(limits);
    Ok(reader.decode()?.to_rgba8())
}

#[async_trait]
impl CaptureTarget for ImageCapture {
    fn width(&self) -> Option<u32> {
        self.width
    }

    fn set_width(&mut self, width: Option<u32>) {
        self.width = width;
    }

    async fn rasterize(&mut self, scale: f32) -> Result<RgbaImage, PdfFailure> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(PdfFailure::Rasterize(format!("invalid scale {scale}")));
        }

        let logical = self.width.unwrap_or(self.snapshot.width());
        let width = (f64::from(logical) * f64::from(scale)).round().max(1.0);
        let ratio = width / f64::from(self.snapshot.width());
        let height = (f64::from(self.snapshot.height()) * ratio).round().max(1.0);
        if width * height > MAX_RASTER_PIXELS as f64 {
            return Err(PdfFailure::Rasterize(format!(
                "raster of {width}x{height} exceeds {MAX_RASTER_PIXELS} pixels"
            )));
        }
        let (target_width, target_height) = (width as u32, height as u32);

        if target_width == self.snapshot.width() && target_height == self.snapshot.height() {
            return Ok(self.snapshot.clone());
        }

        let snapshot = self.snapshot.clone();
        tokio::task::spawn_blocking(move || {
            image::imageops::resize(&snapshot, target_width, target_height, FilterType::Triangle)
        })
        .await
        .map_err(|e| PdfFailure::Rasterize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_rasterize_scales_logical_width() {
        let mut capture = ImageCapture::from_png(&png_bytes(300, 600)).unwrap();
        capture.set_width(Some(600));

        let raster = capture.rasterize(2.0).await.unwrap();
        assert_eq!(raster.dimensions(), (1200, 2400));
    }

    #[tokio::test]
    async fn test_rasterize_at_natural_width() {
        let mut capture = ImageCapture::from_png(&png_bytes(40, 30)).unwrap();
        assert_eq!(capture.width(), None);

        let raster = capture.rasterize(1.0).await.unwrap();
        assert_eq!(raster.dimensions(), (40, 30));
        assert_eq!(raster.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[tokio::test]
    async fn test_rasterize_rejects_bad_scale() {
        let mut capture = ImageCapture::from_png(&png_bytes(4, 4)).unwrap();
        assert!(matches!(
            capture.rasterize(0.0).await,
            Err(PdfFailure::Rasterize(_))
        ));
    }

    #[tokio::test]
    async fn test_tall_narrow_snapshot_is_refused_before_resizing() {
        let mut capture = ImageCapture::from_png(&png_bytes(2, 4000)).unwrap();
        capture.set_width(Some(1200));

        let err = capture.rasterize(2.0).await.unwrap_err();
        assert!(matches!(err, PdfFailure::Rasterize(_)), "{err}");
    }

    #[test]
    fn test_decode_refuses_snapshots_over_the_pixel_budget() {
        let bytes = png_bytes(100, 50);
        assert!(matches!(
            decode_bounded(&bytes, 4_999),
            Err(PdfFailure::Rasterize(_))
        ));
        assert_eq!(decode_bounded(&bytes, 5_000).unwrap().dimensions(), (100, 50));
    }

    #[test]
    fn test_from_png_rejects_garbage() {
        assert!(matches!(
            ImageCapture::from_png(b"definitely not a png"),
            Err(PdfFailure::Image(_))
        ));
    }
}
