mod detection;

pub use detection::resolve_ground_contact;
