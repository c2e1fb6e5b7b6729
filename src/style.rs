pub mod neon;
pub mod sketch;
pub mod spectrum;

use crate::cli_app::Args;
use crate::imagery::{Canvas, Stroke, RGB};
use crate::inout::Data;
use crate::serde::Serialize;
use image::imageops::FilterType;
use image::RgbaImage;
use rand::Rng;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Style {
    Neon,
    Spectrum,
    Sketch,
}

impl core::str::FromStr for Style {
    type Err = String;
    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        match string {
            "neon" => Ok(Style::Neon),
            "spectrum" => Ok(Style::Spectrum),
            "sketch" => Ok(Style::Sketch),
            _ => Err(format!("Invalid style: \"{}\"", string)),
        }
    }
}

/// What a style produces before downsampling.
pub struct Artwork {
    pub start_color: RGB,
    pub end_color: RGB,
    pub strokes: Vec<Stroke>,
    pub canvas: Canvas,
}

pub fn generate(args: &Args, seed: u64, rng: &mut impl Rng) -> (RgbaImage, Data) {
    let start_at = Instant::now();

    let artwork = match args.style {
        Style::Neon => neon::run(args, rng),
        Style::Spectrum => spectrum::run(args, rng),
        Style::Sketch => sketch::run(args, rng),
    };

    let image = finish(&artwork.canvas, args.size);

    let data = Data {
        args: args.clone(),
        seed,
        start_color: artwork.start_color,
        end_color: artwork.end_color,
        render_size: artwork.canvas.width(),
        strokes: artwork.strokes,
        elapsed_seconds: start_at.elapsed().as_secs_f64(),
    };

    (image, data)
}

/// Composite every stroke additively onto the canvas.
pub fn composite(mut canvas: Canvas, strokes: &[Stroke]) -> Canvas {
    strokes.iter().for_each(|stroke| canvas += *stroke);
    canvas
}

/// Downsample the oversized render to the target output size. The filter
/// averages source pixels, which is what smooths the stroke edges.
pub fn finish(canvas: &Canvas, target_size: u32) -> RgbaImage {
    image::imageops::resize(
        &canvas.color(),
        target_size,
        target_size,
        FilterType::Lanczos3,
    )
}

pub fn random_thickness(args: &Args, rng: &mut impl Rng) -> u32 {
    rng.gen_range(args.thickness_min * args.scale..=args.thickness_max * args.scale)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_args(style: Style) -> Args {
        Args {
            image_count: 1,
            output_dir: "img".to_string(),
            scale: 2,
            size: 64,
            padding: 8,
            thickness_min: 2,
            thickness_max: 6,
            line_count: 5,
            style,
            seed: None,
            bg_top: RGB::BLACK,
            bg_bottom: RGB::BLACK,
            save_data: false,
            verbosity: 0,
        }
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!(Ok(Style::Neon), "neon".parse());
        assert_eq!(Ok(Style::Spectrum), "spectrum".parse());
        assert_eq!(Ok(Style::Sketch), "sketch".parse());
    }

    #[test]
    fn test_style_from_str_rejects_unknown() {
        assert!("sparkle".parse::<Style>().is_err());
    }

    #[test]
    fn test_output_dimensions_match_target_for_any_scale() {
        for style in [Style::Neon, Style::Spectrum, Style::Sketch] {
            for scale in 1..=3 {
                let mut args = test_args(style);
                args.scale = scale;
                let (image, _) = generate(&args, 5, &mut rng(5));
                assert_eq!(args.size, image.width(), "failed on scale: {}", scale);
                assert_eq!(args.size, image.height(), "failed on scale: {}", scale);
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let args = test_args(Style::Neon);
        let (first, first_data) = generate(&args, 11, &mut rng(11));
        let (second, second_data) = generate(&args, 11, &mut rng(11));
        assert_eq!(first.as_raw(), second.as_raw());
        assert_eq!(first_data.strokes, second_data.strokes);
    }

    #[test]
    fn test_data_records_the_run() {
        let args = test_args(Style::Neon);
        let (_, data) = generate(&args, 17, &mut rng(17));
        assert_eq!(17, data.seed);
        assert_eq!(args.size * args.scale, data.render_size);
        assert_eq!(args.line_count as usize, data.strokes.len());
    }

    #[test]
    fn test_neon_thickness_within_scaled_bounds() {
        let args = test_args(Style::Neon);
        let (_, data) = generate(&args, 3, &mut rng(3));
        for (_, _, thickness) in data.strokes {
            assert!(thickness >= args.thickness_min * args.scale);
            assert!(thickness <= args.thickness_max * args.scale);
        }
    }

    #[test]
    fn test_spectrum_sweeps_start_to_end() {
        let args = test_args(Style::Spectrum);
        let (_, data) = generate(&args, 23, &mut rng(23));
        assert_eq!(data.start_color, data.strokes.first().unwrap().1);
        assert_eq!(data.end_color, data.strokes.last().unwrap().1);
    }

    #[test]
    fn test_sketch_is_black_on_white() {
        let args = test_args(Style::Sketch);
        let (image, data) = generate(&args, 29, &mut rng(29));

        for (_, rgb, _) in data.strokes {
            assert_eq!(RGB::BLACK, rgb);
        }

        let white = image
            .pixels()
            .filter(|p| p.0 == [255, 255, 255, 255])
            .count();
        assert!(white * 2 > (args.size * args.size) as usize);
    }

    #[test]
    fn test_composite_leaves_background_untouched_elsewhere() {
        let mut args = test_args(Style::Neon);
        args.bg_top = RGB::new(5, 5, 5);
        args.bg_bottom = RGB::new(5, 5, 5);
        let (image, data) = generate(&args, 31, &mut rng(31));

        // Strokes stay inside the padded, recentered area, so the canvas
        // border is pure background even after downsampling.
        let corner = *image.get_pixel(0, 0);
        assert_eq!(image::Rgba([5, 5, 5, 255]), corner);
        assert!(!data.strokes.is_empty());
    }
}
