pub mod ease;
pub mod tween;

pub use ease::Ease;
pub use tween::{Interpolate, Repeat, Tween};
