mod polygon_operation;
mod solution_store;
mod store_error;

pub use polygon_operation::PolygonOperation;
pub use solution_store::SolutionStore;
pub use store_error::StoreError;
