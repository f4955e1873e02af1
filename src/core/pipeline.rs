use crate::core::github::GithubSource;
use crate::core::page::Page;
use crate::core::render;
use crate::core::state::{Command, ProjectSource, ViewState};
use crate::domain::model::{
    Profile, Project, ProjectsDoc, RenderResult, Section, SiteData,
};
use crate::domain::ports::{Pipeline, SiteConfigProvider, Storage};
use crate::utils::error::{Result, SiteError};
use chrono::{Datelike, Local};
use std::sync::Mutex;

/// The portfolio build pipeline: profile and project data in, one rendered
/// page out. Re-enterable: every run re-reads the sources and the template.
pub struct SitePipeline<S: Storage, C: SiteConfigProvider> {
    storage: S,
    config: C,
    github: GithubSource,
    state: Mutex<ViewState>,
}

impl<S: Storage, C: SiteConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let github = GithubSource::new(config.github_api().to_string())?;
        let state = Mutex::new(ViewState::new(config.use_remote(), config.github_user()));
        Ok(Self {
            storage,
            config,
            github,
            state,
        })
    }

    /// Applies a user command to the view state; returns whether the page
    /// needs rebuilding. Pure state step, commit happens via the next run.
    pub fn dispatch(&self, cmd: Command) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let (next, refresh) = state.apply(&cmd);
        *state = next;
        refresh
    }

    pub fn view_state(&self) -> ViewState {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn manual_projects(&self) -> Result<Vec<Project>> {
        let bytes = self.storage.read_file(self.config.projects_path()).await?;
        let doc: ProjectsDoc = serde_json::from_slice(&bytes)?;
        Ok(doc.projects)
    }

    /// Snapshot of the view state, with the username defaulted from the
    /// profile when config never supplied one.
    fn snapshot_state(&self, profile: &Profile) -> ViewState {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.username.is_empty() && !profile.github_username.is_empty() {
            state.username = profile.github_username.clone();
        }
        state.clone()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SiteConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<SiteData> {
        let bytes = self.storage.read_file(self.config.profile_path()).await?;
        let profile: Profile = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            "loaded profile for '{}' ({} roles, {} schools)",
            profile.name,
            profile.experience.len(),
            profile.education.len()
        );

        let state = self.snapshot_state(&profile);
        let projects = match state.effective_source() {
            ProjectSource::Remote => {
                match self
                    .github
                    .fetch_projects(&state.username, self.config.max_projects())
                    .await
                {
                    Ok(projects) => projects,
                    Err(e) => {
                        tracing::warn!(
                            "remote project fetch failed, falling back to manual list: {}",
                            e
                        );
                        self.manual_projects().await?
                    }
                }
            }
            ProjectSource::Manual => self.manual_projects().await?,
        };

        Ok(SiteData { profile, projects })
    }

    async fn transform(&self, data: SiteData) -> Result<RenderResult> {
        let profile = &data.profile;
        let sections = vec![
            Section::new("experience-list", render::experience_list(&profile.experience)),
            Section::new("education-grid", render::education_grid(&profile.education)),
            Section::new("skills-grid", render::skills_grid(&profile.skills)),
            Section::new(
                "certifications",
                render::certification_strip(&profile.certifications),
            ),
            Section::new("contact-links", render::contact_links(&profile.links)),
            Section::new("projects-grid", render::projects_grid(&data.projects)),
        ];
        Ok(RenderResult { sections })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let bytes = self.storage.read_file(self.config.template_path()).await?;
        let mut page = Page::new(String::from_utf8_lossy(&bytes).into_owned());

        for section in &result.sections {
            page.fill(&section.container, &section.html);
        }
        page.fill("year", &Local::now().year().to_string());

        let output_path = format!("{}/index.html", self.config.output_path());
        self.storage
            .write_file(&output_path, page.into_html().as_bytes())
            .await?;
        Ok(output_path)
    }

    async fn on_fatal(&self, err: &SiteError) {
        tracing::error!("profile load failed, page cannot be built: {}", err);

        // Best effort: leave a failure placeholder where the projects would
        // be, without masking the original error.
        let bytes = match self.storage.read_file(self.config.template_path()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("failure page skipped, template unavailable: {}", e);
                return;
            }
        };
        let mut page = Page::new(String::from_utf8_lossy(&bytes).into_owned());
        page.fill("projects-grid", &render::failure_card());

        let output_path = format!("{}/index.html", self.config.output_path());
        if let Err(e) = self
            .storage
            .write_file(&output_path, page.into_html().as_bytes())
            .await
        {
            tracing::error!("failed to write failure page: {}", e);
        }
    }
}
