use crate::chain;
use crate::cli_app::Args;
use crate::imagery::{Canvas, RGB};
use crate::style::{self, Artwork};
use rand::Rng;

/// Like neon, but the gradient sweeps along the chain: segment i is
/// colored with factor i / (count - 1), so the first segment is the start
/// color and the last is the end color. Endpoint colors are plain uniform
/// random RGB rather than vivid-biased.
pub fn run(args: &Args, rng: &mut impl Rng) -> Artwork {
    let size = args.size as i64 * args.scale as i64;
    let padding = args.padding as i64 * args.scale as i64;

    let start_color = RGB::random(rng);
    let end_color = RGB::random(rng);

    let segments = chain::recenter(
        chain::generate(args.line_count as usize, padding, size, rng),
        size,
    );

    let last = usize::max(segments.len().saturating_sub(1), 1);
    let strokes = segments
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let rgb = start_color.lerp(end_color, i as f64 / last as f64);
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
