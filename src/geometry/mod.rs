mod center;

pub use center::{bounding_box, item_center};
