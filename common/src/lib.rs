pub mod config;
pub mod math;
pub mod rng;

pub use config::*;
pub use math::*;
pub use rng::*;
