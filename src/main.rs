extern crate image;
extern crate rand;
extern crate serde;

mod chain;
mod cli_app;
mod geometry;
mod imagery;
mod inout;
mod neon_art;
mod style;

fn main() {
    neon_art::create_art();
}
