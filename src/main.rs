//! Subs Portal CLI
//!
//! Kiosk front end for the customer portal:
//! - Log in with a phone number
//! - Show the year-in-review dashboard
//! - Browse any customer's metrics
//! - Log out

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use subs_portal::config::{generate_default_config, Config, LoggingConfig};
use subs_portal::views::{
    CustomerPicker, DashboardFlow, DashboardState, LoginFlow, MetricCard, Route, Theme,
};
use subs_portal::{FileSessionStore, HttpPortalApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "subs-portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sam's Subs customer portal")]
#[command(long_about = "Look up a loyalty customer by phone number and show their year in review.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Customer API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Dashboard theme (stacked, classic)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a phone number and show the dashboard
    Login {
        /// Phone number on the loyalty account
        phone: String,
    },

    /// Show the dashboard for the logged-in customer
    Dashboard,

    /// Forget the logged-in customer
    Logout,

    /// Show who is logged in
    Whoami,

    /// List customers, or show one customer's metrics
    Customers {
        /// Customer key to show metrics for
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // No subscriber yet; config warnings go to stderr
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => match Config::locate_default() {
            Some(path) => Config::load_with_env(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {}; using defaults", e);
                Config::from_env()
            }),
            None => Config::from_env(),
        },
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session.path = path.to_string_lossy().to_string();
    }
    if let Some(theme) = &cli.theme {
        config.theme.name = theme.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(api = %config.api.base_url, session = %config.session.path, "Config resolved");

    let session = FileSessionStore::new(&config.session.path);
    let theme = config.theme.theme();
    let json = cli.format == "json";

    match cli.command {
        Commands::Login { phone } => {
            let api = HttpPortalApi::new(config.api.client_config())?;
            let mut login = LoginFlow::new();
            login.set_phone(phone);

            match login.submit(&api, &session).await? {
                Some(Route::Dashboard) => {
                    let dashboard = DashboardFlow::load(&api, &session).await;
                    show_dashboard(&dashboard, &theme, json)?;
                }
                _ => {
                    eprintln!("{}", login.error_message().unwrap_or("Login failed."));
                    std::process::exit(1);
                }
            }
        }

        Commands::Dashboard => {
            let api = HttpPortalApi::new(config.api.client_config())?;
            let dashboard = DashboardFlow::load(&api, &session).await;
            show_dashboard(&dashboard, &theme, json)?;
        }

        Commands::Logout => {
            let mut dashboard = DashboardFlow::mount(&session);
            dashboard.logout(&session)?;
            println!("Logged out.");
        }

        Commands::Whoami => match session.envelope()? {
            Some(envelope) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&envelope)?);
                } else {
                    let customer = &envelope.customer;
                    println!(
                        "{} (customer {})",
                        customer.display_name(),
                        customer.customer_key
                    );
                    println!(
                        "Logged in since {}",
                        envelope.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                }
            }
            None => {
                println!("Nobody is logged in.");
            }
        },

        Commands::Customers { select } => {
            let api = HttpPortalApi::new(config.api.client_config())?;
            let mut picker = CustomerPicker::new();
            picker.load_customers(&api).await?;

            if let Some(message) = picker.error_message() {
                eprintln!("{}", message);
                std::process::exit(1);
            }

            match select {
                None => print_customers(&picker, json)?,
                Some(key) => {
                    picker.choose_by_value(&api, &key).await?;
                    if let Some(message) = picker.error_message() {
                        eprintln!("{}", message);
                        std::process::exit(1);
                    }
                    if let Some(customer) = picker.selected_customer() {
                        println!("{}", customer.display_name());
                        println!();
                    }
                    print_cards(&picker.cards(), json)?;
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("subs_portal={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn show_dashboard(
    dashboard: &DashboardFlow,
    theme: &Theme,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match dashboard.state() {
        DashboardState::Redirect(_) => {
            eprintln!("Nobody is logged in.");
            eprintln!();
            eprintln!("Log in first with:");
            eprintln!("  subs-portal login <phone>");
            std::process::exit(1);
        }
        DashboardState::Failed(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        DashboardState::Loading => {
            eprintln!("Metrics are still loading.");
            std::process::exit(1);
        }
        DashboardState::Loaded(metrics) => {
            if json {
                println!("{}", serde_json::to_string_pretty(metrics)?);
                return Ok(());
            }

            if let Some(greeting) = dashboard.greeting() {
                println!("{}", greeting);
            }
            println!("{}", theme.headline());
            println!("{}", theme.tagline());
            println!();
            print_cards(&dashboard.cards(), false)?;
        }
    }

    Ok(())
}

fn print_cards(cards: &[MetricCard], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    for card in cards {
        println!("{}", card.title);
        println!("  {}", card.value);
        if let Some(subtitle) = &card.subtitle {
            println!("  {}", subtitle);
        }
        println!();
    }
    Ok(())
}

fn print_customers(picker: &CustomerPicker, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(picker.customers())?);
        return Ok(());
    }

    if picker.customers().is_empty() {
        println!("No customers found.");
        return Ok(());
    }

    println!("{:<12} {:<30} {}", "Key", "Name", "Phone");
    println!("{}", "-".repeat(60));
    for customer in picker.customers() {
        println!(
            "{:<12} {:<30} {}",
            customer.customer_key.to_string(),
            customer.display_name(),
            customer.phone.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
