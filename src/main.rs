use clap::Parser;
use domain_transfer::adapters::notify::TracingNotifier;
use domain_transfer::core::{ConfigProvider, Domain, WorkspaceId};
use domain_transfer::utils::{logger, validation::Validate};
use domain_transfer::{
    CliConfig, DirectoryConfig, HttpTransferApi, MemoryCache, SubmitOutcome, TransferDomainModal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut directory = match DirectoryConfig::from_file(&cli.config) {
        Ok(directory) => directory,
        Err(e) if e.is_config_error() => {
            tracing::error!("Cannot parse {}: {}", cli.config, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    if let Some(base) = &cli.api_base {
        directory.api.base_url = base.clone();
    }
    if let Err(e) = directory.validate() {
        tracing::error!("Invalid workspace directory {}: {}", cli.config, e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let modal = TransferDomainModal::new(
        Some(Domain::new(cli.domain_id(), cli.domain.clone())),
        directory.context(),
    );
    modal.open();

    let Some(form) = modal.form() else {
        return Ok(());
    };

    let Some(target) = cli.to.as_deref() else {
        if let Some(dialog) = modal.render() {
            println!("{}", dialog);
        }
        return Ok(());
    };

    if let Err(e) = form.select(&WorkspaceId::from(target)) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api = HttpTransferApi::new(directory.api_base_url())?;
    let cache = MemoryCache::new();
    let notifier = TracingNotifier::new(true);

    match form.submit(&api, &cache, &notifier).await {
        SubmitOutcome::Transferred { .. } => Ok(()),
        SubmitOutcome::Failed(e) => {
            tracing::debug!("Transfer error detail: {:?}", e);
            std::process::exit(2);
        }
        SubmitOutcome::NoSelection | SubmitOutcome::AlreadySubmitting => {
            std::process::exit(1);
        }
    }
}
