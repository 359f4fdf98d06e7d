use std::path::Path;

use fractals::graphics::color::PaletteHandler;
use image::{Rgb, RgbImage};
use log::info;

use crate::result::RenderResult;
use crate::Rendering;

/// Applies the palette to a finished frame.
pub fn to_image(rendering: &Rendering, palette: &PaletteHandler) -> RgbImage {
    let nx = rendering.resolution.nx as u32;
    let ny = rendering.resolution.ny as u32;

    RgbImage::from_fn(nx, ny, |px, py| {
        let intensity = rendering.intensities[(py * nx + px) as usize];
        let t = intensity.count.clamp(0.0, 1.0) as f64;
        let (r, g, b) = palette.calculate_color(t);
        Rgb([r, g, b])
    })
}

/// Colors the frame and writes it to `path`, creating parent directories
/// as needed.
pub fn save_png(
    rendering: &Rendering,
    palette: &PaletteHandler,
    path: &Path,
) -> RenderResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    to_image(rendering, palette).save(path)?;
    info!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractals::graphics::color::ColorPalette;
    use fractals::models::pixel::pixel_intensity::PixelIntensity;
    use fractals::models::resolution::Resolution;

    fn two_pixel_frame() -> Rendering {
        Rendering {
            resolution: Resolution::new(2, 1),
            intensities: vec![
                PixelIntensity { zn: 0.0, count: 0.0 },
                PixelIntensity { zn: 0.0, count: 1.0 },
            ],
        }
    }

    #[test]
    fn image_matches_the_frame_dimensions() {
        let image = to_image(&two_pixel_frame(), &PaletteHandler::default());
        assert_eq!((image.width(), image.height()), (2, 1));
    }

    #[test]
    fn grayscale_maps_counts_to_luma() {
        let palette = PaletteHandler::new(ColorPalette::Grayscale);
        let image = to_image(&two_pixel_frame(), &palette);
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let frame = Rendering {
            resolution: Resolution::new(1, 1),
            intensities: vec![PixelIntensity { zn: 0.0, count: 1.7 }],
        };
        let palette = PaletteHandler::new(ColorPalette::Grayscale);
        assert_eq!(to_image(&frame, &palette).get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = std::env::temp_dir().join("fractal-png-test");
        let path = dir.join("nested").join("frame.png");
        save_png(&two_pixel_frame(), &PaletteHandler::default(), &path).unwrap();
        assert!(path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
