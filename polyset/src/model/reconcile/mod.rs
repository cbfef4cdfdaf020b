mod containment_order;
mod reconcile_error;
mod reconcile_geometry;
mod reconcile_ops;

pub use containment_order::containment_order;
pub use reconcile_error::ReconcileError;
pub use reconcile_geometry::ReconcileGeometry;
pub use reconcile_ops::reconcile;
