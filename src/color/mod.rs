mod brightness;
mod utils;

pub use brightness::{color_from_brightness, hue_coefficient};
use smart_leds::RGB8;
pub use utils::rgb_from_u32;

pub type Rgb = RGB8;
