use clap::Parser;
use folio_gen::utils::{logger, validation::Validate};
use folio_gen::{CliConfig, LocalStorage, SiteEngine, SiteFileConfig, SitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting folio-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        let file = SiteFileConfig::from_file(&path)?;
        config = file.merged(config);
        tracing::debug!("merged settings from {}", path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.root.clone());
    let pipeline = SitePipeline::new(storage, config)?;
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Portfolio page written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
