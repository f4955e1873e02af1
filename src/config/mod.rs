pub mod site;

use crate::domain::ports::SiteConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio-gen")]
#[command(about = "Renders portfolio JSON data into a static HTML page")]
pub struct CliConfig {
    /// Site working directory; all other paths are relative to it
    #[arg(long, default_value = ".")]
    pub root: String,

    #[arg(long, default_value = "data/profile.json")]
    pub profile: String,

    #[arg(long, default_value = "data/projects.json")]
    pub projects: String,

    #[arg(long, default_value = "assets/page.html")]
    pub template: String,

    #[arg(long, default_value = "public")]
    pub output: String,

    #[arg(long, help = "Load the project list from the GitHub API instead of the local file")]
    pub from_github: bool,

    /// GitHub username; when empty, the profile's githubUsername is used
    #[arg(long, default_value = "")]
    pub github_user: String,

    #[arg(long, default_value = "https://api.github.com")]
    pub github_api: String,

    #[arg(long, default_value = "9")]
    pub max_projects: usize,

    #[arg(long, help = "Read settings from a folio.toml file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SiteConfigProvider for CliConfig {
    fn root(&self) -> &str {
        &self.root
    }

    fn profile_path(&self) -> &str {
        &self.profile
    }

    fn projects_path(&self) -> &str {
        &self.projects
    }

    fn template_path(&self) -> &str {
        &self.template
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn use_remote(&self) -> bool {
        self.from_github
    }

    fn github_user(&self) -> &str {
        &self.github_user
    }

    fn github_api(&self) -> &str {
        &self.github_api
    }

    fn max_projects(&self) -> usize {
        self.max_projects
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("root", &self.root)?;
        validation::validate_path("profile", &self.profile)?;
        validation::validate_path("projects", &self.projects)?;
        validation::validate_path("template", &self.template)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_url("github_api", &self.github_api)?;
        validation::validate_range("max_projects", self.max_projects, 1, 100)?;
        Ok(())
    }
}
