mod orientation;

pub use orientation::{clamp_bank, next_orientation};
