//! Configuration: schema, loading, and env var overrides.
//!
//! Only the CLI reads configuration; the library crates take everything
//! they need as constructor arguments.

pub mod loader;
pub mod schema;

pub use loader::{get_config_path, load_config, read_config_file, save_config};
pub use schema::Config;
