//! Command implementations.

pub mod config;
pub mod contains;
pub mod show;

pub use self::config::execute_config;
pub use self::contains::execute_contains;
pub use self::show::execute_show;
