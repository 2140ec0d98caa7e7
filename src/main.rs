use clap::Parser;
use pet_inventory::utils::error::{ErrorSeverity, InventoryError};
use pet_inventory::utils::{logger, validation::Validate};
use pet_inventory::{CliConfig, InventoryApp, InventoryStore, LocalStorage, Prompter, Settings};
use std::io;

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: InventoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()))
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match Settings::from_cli(&config) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    if let Err(e) = settings.validate() {
        fail(e);
    }
    tracing::info!(
        data_dir = %settings.data_dir,
        data_file = %settings.data_file,
        "starting pet inventory"
    );

    let storage = LocalStorage::new(settings.data_dir.clone());
    let store = InventoryStore::new(storage, settings.data_file.clone());
    let prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let mut app = match InventoryApp::open(store, prompter, &settings) {
        Ok(app) => app,
        Err(e) => fail(e),
    };

    match app.run() {
        Ok(()) => Ok(()),
        Err(InventoryError::InputClosed) => {
            tracing::warn!("input closed before exit was confirmed, nothing saved");
            Ok(())
        }
        Err(e) => fail(e),
    }
}
