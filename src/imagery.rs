use crate::geometry::{Point, Segment, Vector};
use crate::serde::Serialize;
use rand::Rng;

/// A segment with the color and thickness it will be drawn with.
pub type Stroke = (Segment, RGB, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RGB {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl RGB {
    pub const WHITE: RGB = RGB {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const BLACK: RGB = RGB { r: 0, g: 0, b: 0 };

    pub fn new<T>(r: T, g: T, b: T) -> Self
    where
        T: Into<i64>,
    {
        Self {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }

    pub fn clamped(&self) -> Self {
        Self::new(u8_clamp(self.r), u8_clamp(self.g), u8_clamp(self.b))
    }

    pub fn inverted(&self) -> Self {
        let max = u8::MAX as i64;
        Self::new(max - self.r, max - self.g, max - self.b)
    }

    /// Per-channel linear blend from `self` toward `other`. The factor is
    /// not clamped; channels are only clamped when the canvas is exported.
    pub fn lerp(&self, other: Self, factor: f64) -> Self {
        Self::from(RGBf::from(*self) * (1.0 - factor) + RGBf::from(other) * factor)
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(
            rng.gen_range(0..=255_i64),
            rng.gen_range(0..=255_i64),
            rng.gen_range(0..=255_i64),
        )
    }

    /// Random color biased toward the vivid end of HSV space: saturation
    /// and value are both drawn from [0.5, 1].
    pub fn random_vivid(rng: &mut impl Rng) -> Self {
        Self::from_hsv(
            rng.gen::<f64>(),
            rng.gen_range(0.5..=1.0),
            rng.gen_range(0.5..=1.0),
        )
    }

    /// Hue in [0, 1), saturation and value in [0, 1].
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = ((h % 1.0) + 1.0) % 1.0;

        let c = v * s;
        let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 1.0 / 6.0 {
            (c, x, 0.0)
        } else if h < 2.0 / 6.0 {
            (x, c, 0.0)
        } else if h < 3.0 / 6.0 {
            (0.0, c, x)
        } else if h < 4.0 / 6.0 {
            (0.0, x, c)
        } else if h < 5.0 / 6.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::from(RGBf::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0))
    }
}

fn u8_clamp(n: i64) -> i64 {
    i64::max(u8::MIN.into(), i64::min(u8::MAX.into(), n))
}

impl std::fmt::Display for RGB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let rgb = self.clamped();
        write!(f, "#{:0>2X}{:0>2X}{:0>2X}", rgb.r, rgb.g, rgb.b)
    }
}

#[derive(Clone, Copy)]
struct RGBf {
    r: f64,
    g: f64,
    b: f64,
}

impl RGBf {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl std::ops::Add<Self> for RGBf {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl std::ops::Mul<f64> for RGBf {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl std::convert::From<RGB> for RGBf {
    fn from(rgb: RGB) -> Self {
        Self::new(rgb.r as f64, rgb.g as f64, rgb.b as f64)
    }
}

impl std::convert::From<RGBf> for RGB {
    fn from(rgbf: RGBf) -> Self {
        Self::new(
            rgbf.r.round() as i64,
            rgbf.g.round() as i64,
            rgbf.b.round() as i64,
        )
    }
}

/// Pixels of one rasterized stroke
pub struct PixSegment(Vec<(Point, RGB)>);

impl PixSegment {
    pub fn iter(&self) -> std::slice::Iter<'_, (Point, RGB)> {
        self.0.iter()
    }
}

impl std::convert::From<(Segment, RGB, f64)> for PixSegment {
    fn from((segment, rgb, thickness): (Segment, RGB, f64)) -> Self {
        let radius = f64::max(thickness, 1.0) / 2.0;
        let reach = radius.ceil() as i64 + 1;
        let (min, max) = segment.bounds();
        let color = RGBf::from(rgb);

        let mut pixels = Vec::new();
        for y in (min.y - reach)..=(max.y + reach) {
            for x in (min.x - reach)..=(max.x + reach) {
                let distance = segment.distance_to(Vector::new(x as f64, y as f64));
                // Partial coverage at the rim softens the stroke's edge
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    pixels.push((Point::new(x, y), RGB::from(color * coverage)));
                }
            }
        }

        Self(pixels)
    }
}

impl std::convert::From<Stroke> for PixSegment {
    fn from((segment, rgb, thickness): Stroke) -> Self {
        Self::from((segment, rgb, thickness as f64))
    }
}

/// The in-progress raster. Channels accumulate in i64 so overlapping
/// strokes composite additively; clamping happens on export.
#[derive(Debug)]
pub struct Canvas(Vec<Vec<(i64, i64, i64)>>);

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self(vec![vec![(0, 0, 0); width as usize]; height as usize])
    }

    pub fn vertical_gradient(top: RGB, bottom: RGB, width: u32, height: u32) -> Self {
        Self(
            (0..height)
                .map(|y| {
                    let factor = match height {
                        0 | 1 => 0.0,
                        h => y as f64 / (h - 1) as f64,
                    };
                    let rgb = top.lerp(bottom, factor);
                    vec![(rgb.r, rgb.g, rgb.b); width as usize]
                })
                .collect(),
        )
    }

    pub fn inverted(mut self) -> Self {
        let max = u8::MAX as i64;
        self.0.iter_mut().for_each(|row| {
            row.iter_mut()
                .for_each(|v| *v = (max - v.0, max - v.1, max - v.2))
        });
        self
    }

    pub fn width(&self) -> u32 {
        self.0[0].len() as u32
    }

    pub fn height(&self) -> u32 {
        self.0.len() as u32
    }

    fn plot(&mut self, point: Point, rgb: RGB) {
        if point.x < 0 || point.y < 0 {
            return;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if y >= self.0.len() || x >= self.0[y].len() {
            return;
        }
        let pixel = self.0[y][x];
        self.0[y][x] = (pixel.0 + rgb.r, pixel.1 + rgb.g, pixel.2 + rgb.b);
    }

    pub fn color(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width(), self.height());
        for (y, row) in self.0.iter().enumerate() {
            for (x, p) in row.iter().enumerate() {
                let pixel = img.get_pixel_mut(x as u32, y as u32);
                pixel[0] = i64_to_u8_clamped(p.0);
                pixel[1] = i64_to_u8_clamped(p.1);
                pixel[2] = i64_to_u8_clamped(p.2);
                pixel[3] = u8::MAX; // Alpha channel
            }
        }
        img
    }
}

fn i64_to_u8_clamped(num: i64) -> u8 {
    i64::max(u8::MIN as i64, i64::min(u8::MAX as i64, num)) as u8
}

impl<T: Into<PixSegment>> std::ops::AddAssign<T> for Canvas {
    fn add_assign(&mut self, pix_segment: T) {
        pix_segment
            .into()
            .iter()
            .for_each(|(p, rgb)| self.plot(*p, *rgb))
    }
}

impl std::ops::Index<(u32, u32)> for Canvas {
    type Output = (i64, i64, i64);
    fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
        &self.0[y as usize][x as usize]
    }
}
