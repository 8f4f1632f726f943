// Face element modules
pub mod eyes;
pub mod lid;

// Re-export eye module
pub use eyes::{shape_for, Eye, EyeAnchor, EyeShape, EyeSide};
pub use lid::Eyelid;
