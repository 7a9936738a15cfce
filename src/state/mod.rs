pub mod swipe;
pub mod touch;

pub use touch::TouchState;
