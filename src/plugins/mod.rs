mod paper_plane;

pub use paper_plane::{PaperPlanePlugin, PaperPlaneSet};
