use crate::cli_app;
use crate::cli_app::Args;
use crate::inout;
use crate::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::path::{Path, PathBuf};
use std::time::Instant;

// Generate the requested number of images and save them with any
// requested sidecar data
pub fn create_art() {
    let args = cli_app::parse_args();
    let base_seed = args.seed.unwrap_or_else(rand::random);

    std::fs::create_dir_all(&args.output_dir)
        .unwrap_or_else(|_| panic!("Unable to create output directory: '{}'", args.output_dir));

    if args.verbosity > 0 {
        println!(
            "Generating {} images with base seed {}",
            args.image_count, base_seed
        );
    }

    let start_at = Instant::now();

    (0..args.image_count)
        .into_par_iter()
        .for_each(|index| generate_one(&args, base_seed, index));

    if args.verbosity > 0 {
        println!(
            "Generated {} images in {:.2}s",
            args.image_count,
            start_at.elapsed().as_secs_f64()
        );
    }
}

// Images are independent: each gets its own rng seeded from the base
// seed, so output does not depend on scheduling order.
fn generate_one(args: &Args, base_seed: u64, index: u32) {
    let seed = base_seed.wrapping_add(index as u64);
    let mut rng = StdRng::seed_from_u64(seed);

    let (image, data) = style::generate(args, seed, &mut rng);

    let image_path = output_path(&args.output_dir, index);
    image
        .save(&image_path)
        .unwrap_or_else(|_| panic!("Unable to save image at: '{}'", image_path.display()));

    if args.save_data {
        inout::save(&data, &image_path);
    }

    if args.verbosity > 0 {
        println!(
            "[{:>3}]: saved {} with {} strokes (seed {})",
            index,
            image_path.display(),
            data.strokes.len(),
            seed
        );
    }
}

fn output_path(output_dir: &str, index: u32) -> PathBuf {
    Path::new(output_dir).join(format!("neon{}.png", index))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_output_path_naming() {
        assert_eq!(PathBuf::from("img/neon0.png"), output_path("img", 0));
        assert_eq!(PathBuf::from("out/neon12.png"), output_path("out", 12));
    }
}
