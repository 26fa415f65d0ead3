mod flex;
mod load;

pub use flex::wing_flex;
pub use load::wing_load_system;
