use crate::chain;
use crate::cli_app::Args;
use crate::imagery::{Canvas, RGB};
use crate::style::{self, Artwork};
use rand::Rng;

/// The classic look: two vivid endpoint colors, a glowing chain centered
/// on the background, gradient factor drawn at random per segment.
pub fn run(args: &Args, rng: &mut impl Rng) -> Artwork {
    let size = args.size as i64 * args.scale as i64;
    let padding = args.padding as i64 * args.scale as i64;

    let start_color = RGB::random_vivid(rng);
    let end_color = RGB::random_vivid(rng);

    let segments = chain::recenter(
        chain::generate(args.line_count as usize, padding, size, rng),
        size,
    );

    let strokes = segments
        .into_iter()
        .map(|segment| {
            let rgb = start_color.lerp(end_color, rng.gen::<f64>());
            (segment, rgb, style::random_thickness(args, rng))
        })
        .collect::<Vec<_>>();

    let background =
        Canvas::vertical_gradient(args.bg_top, args.bg_bottom, size as u32, size as u32);

    Artwork {
        start_color,
        end_color,
        canvas: style::composite(background, &strokes),
        strokes,
    }
}
