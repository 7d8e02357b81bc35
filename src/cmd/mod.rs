//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module        | Commands handled      |
//! |---------------|-----------------------|
//! | `interactive` | `Interactive`         |
//! | `translate`   | `Translate`           |
//! | `tables`      | `Tables`              |
//! | `config`      | `Config`              |

pub mod config;
pub mod interactive;
pub mod tables;
pub mod translate;

pub use config::cmd_config;
pub use interactive::cmd_interactive;
pub use tables::cmd_tables;
pub use translate::cmd_translate;
