//! Image loading: read bytes, decode, resize and convert to a pixel grid.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::ascii::{target_pixel_size, GridError, Mode, PixelGrid};

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read image from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has empty bounds")]
    EmptyImage,

    #[error("Resized image has inconsistent size: {0}")]
    Grid(#[from] GridError),
}

/// Read raw image bytes from a file, or from stdin when `input` is `None`
/// or `-`.
pub fn read_input(input: Option<&Path>) -> Result<Vec<u8>, LoadError> {
    match input {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading image from {}", path.display());
            std::fs::read(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            log::debug!("Reading image from stdin");
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(LoadError::Stdin)?;
            Ok(bytes)
        }
    }
}

/// Decode PNG, JPEG or GIF bytes.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, LoadError> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage);
    }
    log::info!("Decoded {}x{} image", width, height);
    Ok(img)
}

/// Resize an image to exactly `width`x`height` pixels with Catmull-Rom
/// filtering and convert it to a pixel grid.
///
/// Color is premultiplied by alpha, so transparent regions render dark.
pub fn to_grid(img: &DynamicImage, width: u32, height: u32) -> Result<PixelGrid, LoadError> {
    let rgba = img.to_rgba8();
    let resized = if rgba.dimensions() == (width, height) {
        rgba
    } else {
        image::imageops::resize(&rgba, width, height, FilterType::CatmullRom)
    };
    let grid = PixelGrid::from_rgba(width as usize, height as usize, resized.as_raw())?;
    Ok(grid)
}

/// Load an image and size it for `columns` characters in `mode`.
pub fn load_grid(input: Option<&Path>, mode: Mode, columns: u32) -> Result<PixelGrid, LoadError> {
    let bytes = read_input(input)?;
    let img = decode(&bytes)?;
    let (src_w, src_h) = img.dimensions();

    let (width, height) = target_pixel_size(mode, columns, src_w, src_h);
    log::debug!(
        "Resizing {}x{} to {}x{} for {} columns in {} mode",
        src_w,
        src_h,
        width,
        height,
        columns,
        mode.name()
    );

    to_grid(&img, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img.clone())
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let decoded = decode(&png_bytes(&img)).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode(b"not an image"), Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_to_grid_keeps_exact_size() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255])));
        let grid = to_grid(&img, 4, 4).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 4));
        assert_eq!(grid.at(3, 3).r, 255);
        assert_eq!(grid.at(3, 3).lum, 76);
    }

    #[test]
    fn test_to_grid_resizes() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 30, Rgba([255, 255, 255, 255])));
        let grid = to_grid(&img, 10, 8).unwrap();
        assert_eq!((grid.width(), grid.height()), (10, 8));
        assert!(grid.samples().iter().all(|s| s.lum > 250));
    }

    #[test]
    fn test_to_grid_transparent_is_black() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 0])));
        let grid = to_grid(&img, 2, 2).unwrap();
        assert!(grid.samples().iter().all(|s| s.lum == 0));
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/glyphcast.png"))).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/glyphcast.png"));
    }
}
