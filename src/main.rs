use anyhow::Result;

use solis_discharge::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .write_style(env_logger::WriteStyle::Never)
        .init();

    let options = Options::new();
    options.validate()?;

    info!(
        "starting solis-discharge {} ({}h discharge window)",
        solis_discharge::CARGO_PKG_VERSION,
        options.hours
    );

    let config = Config::from_env()?;

    solis_discharge::run(&config, options.hours).await
}
