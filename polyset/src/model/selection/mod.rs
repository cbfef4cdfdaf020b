mod bounded_selection;

pub use bounded_selection::{Selection, MAX_SELECTED_POLYGONS};
