use crate::imagery::RGB;
use crate::serde::Serialize;
use crate::style::Style;
use clap::{command, Arg, ArgAction, ArgMatches, Command};

/// The validated arguments passed in by the user
#[derive(Debug, Clone, Serialize)]
pub struct Args {
    pub image_count: u32,
    pub output_dir: String,
    pub scale: u32,
    pub size: u32,
    pub padding: u32,
    pub thickness_min: u32,
    pub thickness_max: u32,
    pub line_count: u32,
    pub style: Style,
    pub seed: Option<u64>,
    pub bg_top: RGB,
    pub bg_bottom: RGB,
    pub save_data: bool,
    pub verbosity: u64,
}

fn string_arg(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_one::<String>(name)
        .expect("Required or default value")
        .to_string()
}

fn copied_arg<T: Copy + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> T {
    *matches
        .get_one::<T>(name)
        .expect("Required or default value")
}

// Parses a color hex code of the form '#RRGGBB' into an instance of 'RGB'
fn parse_rgb(hex_code: &str) -> Result<RGB, String> {
    let error = || format!("Invalid hex code: '{}'", hex_code);
    let digits = hex_code.strip_prefix('#').ok_or_else(|| error())?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(error());
    }

    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| error())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| error())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| error())?;
    Ok(RGB::new(r, g, b))
}

pub fn parse_args() -> Args {
    args_from(create().get_matches())
}

fn args_from(matches: ArgMatches) -> Args {
    let args = Args {
        image_count: copied_arg(&matches, "image_count"),
        output_dir: string_arg(&matches, "output_dir"),
        scale: copied_arg(&matches, "scale"),
        size: copied_arg(&matches, "size"),
        padding: copied_arg(&matches, "padding"),
        thickness_min: copied_arg(&matches, "thickness_min"),
        thickness_max: copied_arg(&matches, "thickness_max"),
        line_count: copied_arg(&matches, "line_count"),
        style: string_arg(&matches, "style")
            .parse()
            .expect("This should have passed validation already"),
        seed: matches.get_one::<u64>("seed").copied(),
        bg_top: copied_arg(&matches, "bg_top"),
        bg_bottom: copied_arg(&matches, "bg_bottom"),
        save_data: matches.get_flag("save_data"),
        verbosity: matches.get_count("verbose") as u64,
    };

    if 2 * args.padding >= args.size {
        panic!(
            "Padding of {} leaves no room for points on a {} pixel canvas",
            args.padding, args.size
        );
    }

    if args.thickness_min > args.thickness_max {
        panic!(
            "--tmin {} is greater than --tmax {}",
            args.thickness_min, args.thickness_max
        );
    }

    if args.verbosity > 1 {
        println!("Running with arguments: {:?}", args);
    }

    args
}

fn create() -> Command {
    command!()
    .arg(Arg::new("image_count")
        .value_name("INTEGER")
        .short('n')
        .long("image-count")
        .default_value("4")
        .value_parser(clap::value_parser!(u32).range(1..=100))
        .help("Number of images to produce.")
    )
    .arg(Arg::new("output_dir")
        .value_name("DIRECTORY")
        .short('o')
        .long("output-dir")
        .default_value("img")
        .help("Directory to store all the images. Created if it does not exist.")
    )
    .arg(Arg::new("scale")
        .value_name("INTEGER")
        .long("scale")
        .default_value("2")
        .value_parser(clap::value_parser!(u32).range(1..=16))
        .help("Oversampling factor: images render at size * scale and are downsampled to size with an anti-aliasing filter.")
    )
    .arg(Arg::new("size")
        .value_name("INTEGER")
        .long("size")
        .default_value("256")
        .value_parser(clap::value_parser!(u32).range(1..=8192))
        .help("Width and height of the output images in pixels.")
    )
    .arg(Arg::new("padding")
        .value_name("INTEGER")
        .long("padding")
        .default_value("24")
        .value_parser(clap::value_parser!(u32).range(0..=4096))
        .help("Inner margin that line endpoints keep from the canvas edge. Must be less than half the size.")
    )
    .arg(Arg::new("thickness_min")
        .value_name("INTEGER")
        .long("tmin")
        .default_value("2")
        .value_parser(clap::value_parser!(u32).range(1..))
        .help("Minimum line thickness in output pixels.")
    )
    .arg(Arg::new("thickness_max")
        .value_name("INTEGER")
        .long("tmax")
        .default_value("32")
        .value_parser(clap::value_parser!(u32).range(1..))
        .help("Maximum line thickness in output pixels.")
    )
    .arg(Arg::new("line_count")
        .value_name("INTEGER")
        .short('l')
        .long("lines")
        .default_value("10")
        .value_parser(clap::value_parser!(u32).range(1..=10000))
        .help("How many connected line segments each image contains.")
    )
    .arg(Arg::new("style")
        .value_name("STYLE")
        .short('s')
        .long("style")
        .value_parser(["neon", "spectrum", "sketch"])
        .default_value("neon")
        .help("Should the lines glow in gradient colors picked at random per segment, sweep the gradient along the chain, or be drawn as plain black hairlines on white?")
    )
    .arg(Arg::new("seed")
        .value_name("INTEGER")
        .short('S')
        .long("seed")
        .value_parser(clap::value_parser!(u64))
        .help("Base seed for generation. Image N uses seed + N, so a run is reproducible. Random when omitted.")
    )
    .arg(Arg::new("bg_top")
        .value_name("HEX CODE")
        .long("bg-top")
        .default_value("#000000")
        .value_parser(parse_rgb)
        .help("An RGB color in hex format `#RRGGBB` at the top of the background gradient.")
    )
    .arg(Arg::new("bg_bottom")
        .value_name("HEX CODE")
        .long("bg-bottom")
        .default_value("#000000")
        .value_parser(parse_rgb)
        .help("An RGB color in hex format `#RRGGBB` at the bottom of the background gradient.")
    )
    .arg(Arg::new("save_data")
        .short('d')
        .long("save-data")
        .action(ArgAction::SetTrue)
        .help("Write a JSON file next to each image describing how it was generated: argument values, seed, endpoint colors, and every stroke's segment, color, and thickness.")
    )
    .arg(Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Output debugging messages. Pass multiple times for more verbose logging.")
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn args_of(argv: &[&str]) -> Args {
        args_from(
            create()
                .try_get_matches_from(argv.iter().copied())
                .expect("arguments should parse"),
        )
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(Ok(RGB::new(255, 128, 0)), parse_rgb("#FF8000"));
        assert_eq!(Ok(RGB::new(0, 0, 0)), parse_rgb("#000000"));
        assert_eq!(Ok(RGB::new(171, 205, 239)), parse_rgb("#abcdef"));
    }

    #[test]
    fn test_parse_rgb_rejects_garbage() {
        assert!(parse_rgb("FF8000").is_err());
        assert!(parse_rgb("#FF80").is_err());
        assert!(parse_rgb("#FF80001").is_err());
        assert!(parse_rgb("#GG8000").is_err());
        assert!(parse_rgb("#ééé").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = args_of(&["neon_art"]);
        assert_eq!(4, args.image_count);
        assert_eq!("img", args.output_dir);
        assert_eq!(2, args.scale);
        assert_eq!(256, args.size);
        assert_eq!(24, args.padding);
        assert_eq!(2, args.thickness_min);
        assert_eq!(32, args.thickness_max);
        assert_eq!(10, args.line_count);
        assert_eq!(Style::Neon, args.style);
        assert_eq!(None, args.seed);
        assert_eq!(RGB::BLACK, args.bg_top);
        assert_eq!(RGB::BLACK, args.bg_bottom);
        assert!(!args.save_data);
        assert_eq!(0, args.verbosity);
    }

    #[test]
    fn test_style_and_seed() {
        let args = args_of(&["neon_art", "-s", "spectrum", "-S", "99"]);
        assert_eq!(Style::Spectrum, args.style);
        assert_eq!(Some(99), args.seed);
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        assert!(create()
            .try_get_matches_from(["neon_art", "-s", "sparkle"])
            .is_err());
    }

    #[test]
    fn test_image_count_out_of_range_is_rejected() {
        assert!(create()
            .try_get_matches_from(["neon_art", "-n", "101"])
            .is_err());
    }

    #[test]
    #[should_panic]
    fn test_padding_must_leave_room() {
        args_of(&["neon_art", "--size", "100", "--padding", "50"]);
    }

    #[test]
    #[should_panic]
    fn test_thickness_bounds_must_be_ordered() {
        args_of(&["neon_art", "--tmin", "10", "--tmax", "4"]);
    }
}
