use crate::domain::model::{RenderResult, SiteData};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait SiteConfigProvider: Send + Sync {
    fn root(&self) -> &str;
    fn profile_path(&self) -> &str;
    fn projects_path(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn use_remote(&self) -> bool;
    fn github_user(&self) -> &str;
    fn github_api(&self) -> &str;
    fn max_projects(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteData>;
    async fn transform(&self, data: SiteData) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;

    /// Invoked when extract fails terminally (profile unavailable). Writes a
    /// best-effort failure page; the original error is still surfaced.
    async fn on_fatal(&self, err: &SiteError);
}
