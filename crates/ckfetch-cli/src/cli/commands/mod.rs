//! CLI command handlers. Each command is in its own file.

mod checksum;
mod fetch;
mod serve;
mod show;

pub use checksum::run_checksum;
pub use fetch::run_fetch;
pub use serve::run_serve;
pub use show::run_show;
