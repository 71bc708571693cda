use anyhow::{Context, Result};
use env_logger::Env;
use tildesite::{Config, SiteOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = config.site_meta().context("Failed to determine site metadata")?;
    let nav_links = config.nav_links();

    let report = tildesite::generate_site(&SiteOptions {
        content_dir: &config.content,
        output_dir: &config.output,
        site: &site,
        nav_links: &nav_links,
    })
    .context("Failed to generate site")?;

    log::info!(
        "Generated {} pages and copied {} static files into {}",
        report.pages.len(),
        report.static_files,
        config.output.display()
    );

    if config.no_open {
        return Ok(());
    }

    let entry = report.home().unwrap_or(report.not_found.as_path());
    if let Err(e) = open::that(entry) {
        log::warn!("Failed to open {} in browser: {}", entry.display(), e);
    }

    Ok(())
}
