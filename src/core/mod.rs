pub mod engine;
pub mod github;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod storage;

pub use crate::domain::model::{RenderResult, Section, SiteData};
pub use crate::domain::ports::{Pipeline, SiteConfigProvider, Storage};
pub use crate::utils::error::Result;
