use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one build: extract the data, render the sections, commit the page.
pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        println!("Building portfolio page...");

        let data = match self.pipeline.extract().await {
            Ok(data) => data,
            Err(e) => {
                self.pipeline.on_fatal(&e).await;
                return Err(e);
            }
        };
        println!(
            "Loaded profile '{}' with {} projects",
            data.profile.name,
            data.projects.len()
        );

        let rendered = self.pipeline.transform(data).await?;
        println!("Rendered {} sections", rendered.sections.len());

        let output_path = self.pipeline.load(rendered).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
