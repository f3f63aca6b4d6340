use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use catalog::core::config::{self, ResolvedConfig};
use catalog::core::product::Catalog;
use catalog::core::state::App;
use catalog::markup::Document;

#[derive(Parser)]
#[command(name = "catalog", about = "Data-binding showcase over a product catalog")]
struct Args {
    /// JSON file with the product list (defaults to the built-in fixture)
    #[arg(short, long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive catalog view (default)
    Tui,
    /// Print the binding showcase page as HTML
    Render {
        /// Product name to put in the selection before rendering
        #[arg(short, long)]
        select: Option<String>,
    },
    /// Print every product's derived presentation values as JSON
    Inspect {
        /// Product name to put in the selection before deriving
        #[arg(short, long)]
        select: Option<String>,
    },
}

fn build_app(resolved: &ResolvedConfig, select: Option<String>) -> Result<App, Box<dyn Error>> {
    let catalog = match &resolved.fixture {
        Some(path) => Catalog::load(path)?,
        None => Catalog::fixture(),
    };
    let mut app = App::from_config(catalog, resolved);
    if let Some(name) = select {
        app.selected_product = name;
    }
    Ok(app)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to catalog.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("catalog.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::CatalogConfig::default()
    });
    let resolved = config::resolve(&file_config, args.fixture.as_deref());
    log::info!("Catalog starting with fixture {:?}", resolved.fixture);

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let app = build_app(&resolved, None)?;
            catalog::tui::run(app)?;
        }
        Command::Render { select } => {
            let app = build_app(&resolved, select)?;
            println!("{}", Document::render(&app)?);
        }
        Command::Inspect { select } => {
            let app = build_app(&resolved, select)?;
            let report = serde_json::json!({
                "status": app.classes(),
                "product_count": app.product_count(),
                "selected_product": app.selected_product,
                "selected_index": app.selected_index(),
                "products": app.presentations(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
