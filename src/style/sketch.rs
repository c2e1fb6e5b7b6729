use crate::chain;
use crate::cli_app::Args;
use crate::imagery::{Canvas, RGB};
use crate::style::{self, Artwork};
use rand::Rng;

/// Plain black hairlines on a white canvas: endpoints anywhere on the
/// canvas, no re-centering. Strokes composite additively, so the render
/// happens inverted and is flipped at the end.
pub fn run(args: &Args, rng: &mut impl Rng) -> Artwork {
    let size = args.size as i64 * args.scale as i64;

    let segments = chain::generate(args.line_count as usize, 0, size, rng);
    let mut strokes = segments
        .into_iter()
        .map(|segment| (segment, RGB::WHITE, args.scale))
        .collect::<Vec<_>>();

    let canvas = style::composite(Canvas::new(size as u32, size as u32), &strokes).inverted();

    strokes
        .iter_mut()
        .for_each(|(_, rgb, _)| *rgb = rgb.inverted());

    Artwork {
        start_color: RGB::BLACK,
        end_color: RGB::BLACK,
        strokes,
        canvas,
    }
}
