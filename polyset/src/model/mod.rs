pub mod feature;
pub mod reconcile;
pub mod selection;
pub mod statistics;
pub mod store;

#[cfg(test)]
pub(crate) mod test_library;
