//! pdfsmith - PDF generation web service
//!
//! CLI entry point

use clap::Parser;
use pdfsmith::{
    exit_codes,
    // CLI
    Cli, Commands, ServeArgs,
    // Config
    CliOverrides, Config,
    // Web server
    WebServer,
};
use pdfsmith::web::{DEFAULT_BIND, DEFAULT_PORT};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args),
        Commands::Info => run_info(),
    };

    std::process::exit(match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

// ============ Serve Command ============

fn run_serve(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(args.verbose);

    // Load config file if specified, otherwise probe the default locations
    let file_config = match &args.config {
        Some(config_path) => match Config::load_from_path(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "Error: Failed to load config file {}: {}",
                    config_path.display(),
                    e
                );
                std::process::exit(exit_codes::CONFIG_ERROR);
            }
        },
        None => Config::load().unwrap_or_default(),
    };

    // Merge file values with environment and CLI arguments (CLI takes precedence)
    let server_config = file_config
        .apply_env()
        .merge_with_cli(&create_cli_overrides(args));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let server = WebServer::with_config(server_config);
        server.run().await.map_err(|e| e.to_string())
    })?;

    Ok(())
}

// ============ Helper Functions ============

/// Create CLI overrides from ServeArgs
///
/// Only override config file values when CLI explicitly sets a non-default value.
/// This allows config files to provide defaults that aren't overridden by clap defaults.
fn create_cli_overrides(args: &ServeArgs) -> CliOverrides {
    let mut overrides = CliOverrides::new();

    // Port and bind carry clap defaults - only set if the user changed them
    if args.port != DEFAULT_PORT {
        overrides.port = Some(args.port);
    }
    if args.bind != DEFAULT_BIND {
        overrides.bind = Some(args.bind.clone());
    }

    // Optional flags pass straight through
    overrides.pdf_path = args.pdf_path.clone();
    overrides.pdf_url = args.pdf_url.clone();
    overrides.body_limit = args.body_limit;

    overrides
}

/// Initialize the tracing subscriber for CLI output
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

// ============ Info Command ============

fn run_info() -> Result<(), Box<dyn std::error::Error>> {
    println!("pdfsmith v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // System Information
    println!("System Information:");
    println!("  Platform: {}", std::env::consts::OS);
    println!("  Arch: {}", std::env::consts::ARCH);

    // Config File Locations
    println!();
    println!("Config File Locations:");
    println!("  Local: ./{}", pdfsmith::config::LOCAL_CONFIG_FILE);
    if let Some(path) = Config::user_config_path() {
        println!("  User:  {}", path.display());
    }

    // Effective Configuration
    let config = Config::load()
        .unwrap_or_default()
        .apply_env()
        .merge_with_cli(&CliOverrides::new());

    println!();
    println!("Effective Configuration:");
    println!("  Bind:       {}", config.bind);
    println!("  Port:       {}", config.port);
    println!("  PDF URL:    {}", config.pdf_url);
    println!("  PDF path:   {}", config.pdf_path.display());
    println!("  Body limit: {} bytes", config.body_limit);

    // Backing File
    println!();
    println!("Backing File:");
    match std::fs::metadata(&config.pdf_path) {
        Ok(meta) => println!(
            "  {} ({} bytes)",
            config.pdf_path.display(),
            meta.len()
        ),
        Err(_) => println!("  {} (missing)", config.pdf_path.display()),
    }

    Ok(())
}
