#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_canvas::AutomatonConfig;
use life_pixels_support::{animate, Error};
use log::info;

const RANDOM_START: bool = false;

fn main() -> Result<(), Error> {
    env_logger::init();
    let config = if RANDOM_START {
        AutomatonConfig::random()
    } else {
        AutomatonConfig::default()
    };
    animate(config)?;
    info!("Window closed");
    Ok(())
}
