use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use sql_scaffold::utils::display_summary;
use sql_scaffold::{CHAPTERS, ScaffoldConfig, Scaffolder, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();

    let config = ScaffoldConfig::load()?;
    debug!("输出配置: {:?}", config);
    let scaffolder = Scaffolder::from_config(&config);

    let start = Instant::now();
    let chapters = scaffolder.scaffold(CHAPTERS).await?;
    display_summary(chapters.len(), start.elapsed());

    Ok(())
}
