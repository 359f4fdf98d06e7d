use fractals::models::fern::BarnsleyFern;
use fractals::models::pixel::pixel_intensity::PixelIntensity;
use fractals::models::resolution::Resolution;
use rand::Rng;

use crate::result::RenderResult;
use crate::vector::{bounding_box, Fit};
use crate::Rendering;

/// Plots the fern's orbit with the ambient thread RNG; the cloud is not
/// required to be reproducible.
pub fn render_fern(fern: &BarnsleyFern, resolution: Resolution) -> RenderResult<Rendering> {
    render_fern_with(fern, resolution, &mut rand::thread_rng())
}

/// Same as [`render_fern`] but with caller-supplied randomness, for
/// deterministic tests.
pub fn render_fern_with<R: Rng>(
    fern: &BarnsleyFern,
    resolution: Resolution,
    rng: &mut R,
) -> RenderResult<Rendering> {
    let points = fern.points(rng)?;
    let nx = resolution.nx as usize;
    let ny = resolution.ny as usize;
    let mut buffer = vec![0u8; nx * ny];

    if let Some((min, max)) = bounding_box(points.iter().copied()) {
        let fit = Fit::around(min, max, resolution);
        for point in points {
            let (px, py) = fit.apply(point);
            if px >= 0 && (px as usize) < nx && py >= 0 && (py as usize) < ny {
                buffer[py as usize * nx + px as usize] = 255;
            }
        }
    }

    let intensities = buffer
        .iter()
        .map(|&hit| PixelIntensity {
            zn: 0.0,
            count: if hit > 0 { 1.0 } else { 0.0 },
        })
        .collect();

    Ok(Rendering {
        resolution,
        intensities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_clouds_render_identically() {
        let fern = BarnsleyFern::new(20_000);
        let resolution = Resolution::new(64, 96);

        let first =
            render_fern_with(&fern, resolution, &mut StdRng::seed_from_u64(11)).unwrap();
        let second =
            render_fern_with(&fern, resolution, &mut StdRng::seed_from_u64(11)).unwrap();

        let hits = |rendering: &Rendering| {
            rendering
                .intensities
                .iter()
                .map(|intensity| intensity.count)
                .collect::<Vec<_>>()
        };
        assert_eq!(hits(&first), hits(&second));
    }

    #[test]
    fn cloud_covers_a_meaningful_share_of_the_frame() {
        let rendering = render_fern_with(
            &BarnsleyFern::default(),
            Resolution::new(64, 96),
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();
        let hits = rendering
            .intensities
            .iter()
            .filter(|intensity| intensity.count > 0.0)
            .count();
        assert!(hits > 200);
    }

    #[test]
    fn zero_points_is_rejected() {
        let outcome = render_fern_with(
            &BarnsleyFern::new(0),
            Resolution::new(16, 16),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(outcome.is_err());
    }
}
