mod app_config;
mod app_error;
mod polyset_cli;
pub mod run;
pub mod solution_io;

pub use app_config::PolysetAppConfig;
pub use app_error::PolysetAppError;
pub use polyset_cli::{PolysetCliArguments, PolysetOperation, SessionArguments};
