use anyhow::Result;
use marquee_core::config::AppConfig;
use marquee_infrastructure::ConfigService;

pub fn path(service: &ConfigService) {
    println!("{}", service.path().display());
}

pub fn show(config: &AppConfig) -> Result<()> {
    let mut shown = config.clone();
    // Connection strings routinely embed credentials
    if shown.database.uri.is_some() {
        shown.database.uri = Some("<redacted>".to_string());
    }
    println!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}
