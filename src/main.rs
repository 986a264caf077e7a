use bank_system::utils::{logger, validation::Validate};
use bank_system::{database, CliConfig, FileConfig};
use clap::Parser;

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let file_config = FileConfig::from_file(&config.config)?;
    file_config.log_entries();

    let status = database::bootstrap()?;
    tracing::debug!("Bootstrap status: {:?}", status);

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("Starting bank-system");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Startup failed: {:#}", e);
        match e.downcast_ref::<bank_system::BankError>() {
            Some(bank_error) => eprintln!("❌ {}", bank_error.user_friendly_message()),
            None => eprintln!("❌ {}", e),
        }
        std::process::exit(1);
    }

    tracing::info!("✅ bank-system started");
}
