pub mod options;
pub mod schedule;
pub mod turn_driver;

pub use options::*;
pub use schedule::*;
pub use turn_driver::*;
