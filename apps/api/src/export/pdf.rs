//! Paginated-image renderer: rasterizes a capture target and slices the raster
//! into A4 pages, one JPEG per page.

use std::io::Cursor;

use image::{codecs::jpeg::JpegEncoder, imageops, DynamicImage, Rgba, RgbImage, RgbaImage};
use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, Stream,
};
use thiserror::Error;

use super::{capture::CaptureTarget, portfolio_filename, Artifact, PDF_MIME};
use crate::errors::AppError;

/// Logical layout width used while capturing.
pub const CAPTURE_WIDTH: u32 = 1200;
/// Device pixels per logical unit.
pub const CAPTURE_SCALE: f32 = 2.0;

const JPEG_QUALITY: u8 = 90;
// A4 in PDF points.
const A4_WIDTH_PT: i64 = 595;
const A4_HEIGHT_PT: i64 = 842;

#[derive(Debug, Error)]
pub enum PdfFailure {
    #[error("no capture target was provided")]
    MissingTarget,
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("export task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// The only error a PDF export ever surfaces. The cause is logged, not shown.
#[derive(Debug, Error)]
#[error("Failed to generate PDF. Please try again.")]
pub struct PdfExportError(#[from] pub PdfFailure);

impl From<PdfExportError> for AppError {
    fn from(e: PdfExportError) -> Self {
        AppError::Export(e.to_string())
    }
}

/// Captures `target` at the export width and returns `<slug>-portfolio.pdf`.
///
/// The target's width is restored before returning, whether or not capture succeeded.
pub async fn render_pdf<T>(target: Option<&mut T>, full_name: &str) -> Result<Artifact, PdfExportError>
where
    T: CaptureTarget + ?Sized,
{
    let filename = portfolio_filename(full_name, "pdf");
    match try_render(target).await {
        Ok(bytes) => {
            tracing::info!(filename = %filename, bytes = bytes.len(), "PDF export complete");
            Ok(Artifact::new(filename, PDF_MIME, bytes))
        }
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "PDF export failed");
            Err(e.into())
        }
    }
}

async fn try_render<T>(target: Option<&mut T>) -> Result<Vec<u8>, PdfFailure>
where
    T: CaptureTarget + ?Sized,
{
    let target = target.ok_or(PdfFailure::MissingTarget)?;
    let raster = capture(target).await?;
    tokio::task::spawn_blocking(move || {
        let pages = paginate(&raster);
        assemble(&pages)
    })
    .await?
}

async fn capture<T>(target: &mut T) -> Result<RgbaImage, PdfFailure>
where
    T: CaptureTarget + ?Sized,
{
    let original = target.width();
    target.set_width(Some(CAPTURE_WIDTH));
    let raster = target.rasterize(CAPTURE_SCALE).await;
    target.set_width(original);
    raster
}

/// Pixel height of one A4 page for a raster `width` pixels wide.
fn page_height(width: u32) -> u32 {
    ((u64::from(width) * 297) / 210).max(1) as u32
}

fn page_count(height: u32, page_height: u32) -> u32 {
    height.div_ceil(page_height).max(1)
}

/// Slices the raster top to bottom into page-sized images. The last page is padded white.
fn paginate(raster: &RgbaImage) -> Vec<RgbImage> {
    let width = raster.width().max(1);
    let page_h = page_height(width);

    (0..page_count(raster.height(), page_h))
        .map(|index| {
            let mut page = RgbaImage::from_pixel(width, page_h, Rgba([255, 255, 255, 255]));
            let offset = i64::from(index) * i64::from(page_h);
            imageops::overlay(&mut page, raster, 0, -offset);
            DynamicImage::ImageRgba8(page).to_rgb8()
        })
        .collect()
}

fn encode_jpeg(page: &RgbImage) -> Result<Vec<u8>, PdfFailure> {
    let mut buf = Cursor::new(Vec::new());
    page.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY))?;
    Ok(buf.into_inner())
}

/// Builds an A4 document with one full-bleed image per page.
fn assemble(pages: &[RgbImage]) -> Result<Vec<u8>, PdfFailure> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let jpeg = encode_jpeg(page)?;
        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => Object::Integer(i64::from(page.width())),
                "Height" => Object::Integer(i64::from(page.height())),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => Object::Integer(8),
                "Filter" => "DCTDecode",
            },
            jpeg,
        );
        let image_id = doc.add_object(image);

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        Object::Integer(A4_WIDTH_PT),
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(A4_HEIGHT_PT),
                        Object::Integer(0),
                        Object::Integer(0),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(A4_WIDTH_PT),
                Object::Integer(A4_HEIGHT_PT),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
