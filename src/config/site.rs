use crate::config::CliConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `folio.toml` site configuration. Fields present in the file
/// override the CLI values; absent fields leave them alone.
///
/// ```toml
/// [site]
/// github_username = "alice"
/// use_github = true
/// max_projects = 6
///
/// [paths]
/// profile = "data/profile.json"
/// output = "dist"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteFileConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub paths: PathsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub github_username: Option<String>,
    pub use_github: Option<bool>,
    pub max_projects: Option<usize>,
    pub github_api: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsSection {
    pub root: Option<String>,
    pub profile: Option<String>,
    pub projects: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
}

impl SiteFileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn merged(self, mut cli: CliConfig) -> CliConfig {
        if let Some(v) = self.site.github_username {
            cli.github_user = v;
        }
        if let Some(v) = self.site.use_github {
            cli.from_github = v;
        }
        if let Some(v) = self.site.max_projects {
            cli.max_projects = v;
        }
        if let Some(v) = self.site.github_api {
            cli.github_api = v;
        }
        if let Some(v) = self.paths.root {
            cli.root = v;
        }
        if let Some(v) = self.paths.profile {
            cli.profile = v;
        }
        if let Some(v) = self.paths.projects {
            cli.projects = v;
        }
        if let Some(v) = self.paths.template {
            cli.template = v;
        }
        if let Some(v) = self.paths.output {
            cli.output = v;
        }
        cli
    }
}
