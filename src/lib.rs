pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{site::SiteFileConfig, CliConfig};
pub use core::engine::SiteEngine;
pub use core::github::GithubSource;
pub use core::pipeline::SitePipeline;
pub use core::state::{Command, ProjectSource, ViewState};
pub use core::storage::LocalStorage;
pub use domain::model::{Profile, Project};
pub use utils::error::{Result, SiteError};
