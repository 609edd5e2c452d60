mod utils;
mod wheel;

use smart_leds::RGB8;

pub use utils::{BLACK, rgb_from_u32};
pub use wheel::wheel;

pub type Rgb = RGB8;
