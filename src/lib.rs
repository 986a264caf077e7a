pub mod config;
pub mod database;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::file_config::FileConfig;
pub use domain::account::{Account, AccountBuilder};
pub use domain::attribute::{AccountAttribute, UnknownAttribute, UserAttribute};
pub use domain::projection::{Project, ProjectionError, PropertyValue};
pub use domain::user::{User, UserBuilder};
pub use utils::error::{BankError, Result};
