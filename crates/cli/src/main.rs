use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use storedesk_api::{CollectionService, StorefrontClient};
use storedesk_engine::{
    AddOutcome, AddProductWorkflow, CollectionDetailView, FilterCounts, PromotionalBanner, filter_products,
    load_edit_collection, validate_product_id,
};
use storedesk_types::ProductFilter;
use storedesk_util::{StoredeskConfig, format_price};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "storedesk.log";

#[derive(Debug, Parser)]
#[command(name = "storedesk", version, about = "Manage storefront collections from the terminal")]
struct Cli {
    /// Storefront backend base URL (overrides config and STOREDESK_API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the interactive edit-collection page
    Edit {
        /// Collection route slug, e.g. `blue-sofa-99001`
        slug: String,
    },
    /// Print a collection's details
    Show {
        slug: String,
        /// Print the raw collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a collection's products
    Products {
        slug: String,
        #[arg(long, default_value_t = ProductFilter::All)]
        filter: ProductFilter,
    },
    /// Add a product to a collection by its 5-digit ID
    AddProduct { slug: String, product_id: String },
    /// Describe the promotional banner shown to shoppers
    Banner {
        slug: String,
        /// Viewport width used to pick the artwork
        #[arg(long, default_value_t = 1280)]
        width: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Command::Edit { .. });
    init_tracing(interactive)?;

    let mut config = StoredeskConfig::load().context("failed to load configuration")?;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    let client = StorefrontClient::from_config(&config)?;
    debug!(api_base = %client.base_url(), "storefront client ready");
    let service: Arc<dyn CollectionService> = Arc::new(client);

    match cli.command {
        Command::Edit { slug } => storedesk_tui::run(config, service, slug).await,
        Command::Show { slug, json } => show(service.as_ref(), &slug, json).await,
        Command::Products { slug, filter } => products(service.as_ref(), &slug, filter).await,
        Command::AddProduct { slug, product_id } => add_product(service.as_ref(), &slug, &product_id).await,
        Command::Banner { slug, width } => banner(service.as_ref(), &slug, width).await,
    }
}

/// Logs go to stderr, or to a file under the cache dir while the TUI owns
/// the terminal.
fn init_tracing(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if interactive {
        let path = log_file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

fn log_file_path() -> PathBuf {
    dirs_next::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("storedesk")
        .join(LOG_FILE_NAME)
}

async fn show(service: &dyn CollectionService, slug: &str, json: bool) -> Result<()> {
    let collection = load_edit_collection(service, slug).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    let view = CollectionDetailView::from_collection(&collection, Utc::now());
    println!("{} (#{})", view.title, view.id);
    for field in &view.basic_details {
        println!("  {:<10} {}", field.label, field.value);
    }
    println!("  {:<10} {}", "Campaign", view.campaign_label());
    println!("  {:<10} {}", "Visibility", view.visibility.label());
    println!("  {:<10} {}", "Products", view.product_count);
    Ok(())
}

async fn products(service: &dyn CollectionService, slug: &str, filter: ProductFilter) -> Result<()> {
    let collection = load_edit_collection(service, slug).await?;
    let counts = FilterCounts::from_products(&collection.products);
    let tabs: Vec<String> = ProductFilter::ALL_TAGS
        .iter()
        .map(|tag| {
            let label = counts.tab_label(*tag);
            if *tag == filter { format!("[{label}]") } else { label }
        })
        .collect();
    println!("{}", tabs.join("  "));

    let rows = filter_products(&collection.products, filter);
    if rows.is_empty() {
        println!("No products match this filter");
        return Ok(());
    }
    println!("{:>3}  {:<8} {:<32} {:>12}  {}", "#", "ID", "Name", "Price", "Visibility");
    for (index, product) in rows.iter().enumerate() {
        println!(
            "{:>3}  {:<8} {:<32} {:>12}  {}",
            index + 1,
            product.id,
            product.name,
            format_price(product.price),
            product.visibility.label()
        );
    }
    Ok(())
}

async fn add_product(service: &dyn CollectionService, slug: &str, raw_product_id: &str) -> Result<()> {
    // Arguments are not an input field: reject rather than strip non-digits.
    validate_product_id(raw_product_id)?;
    let collection = load_edit_collection(service, slug).await?;

    let mut workflow = AddProductWorkflow::new(collection.id.clone());
    workflow.input_mut().set_input(raw_product_id);
    match workflow.submit(service).await {
        AddOutcome::Added(message) => {
            info!(collection_id = %collection.id, "add-product finished");
            println!("{message}");
            Ok(())
        }
        AddOutcome::Rejected(error) => bail!(error),
        AddOutcome::Failed => bail!(workflow.alert().message().to_string()),
    }
}

async fn banner(service: &dyn CollectionService, slug: &str, width: u32) -> Result<()> {
    let collection = load_edit_collection(service, slug).await?;
    let banner = PromotionalBanner::for_collection(&collection);
    let image = banner.image_for_width(width);
    println!("href   {}", banner.href);
    println!("alt    {}", banner.alt);
    println!("image  {} ({}x{})", image.src, image.width, image.height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_products_filter_and_global_api_base() {
        let cli = Cli::try_parse_from([
            "storedesk",
            "products",
            "blue-sofa-99001",
            "--filter",
            "Inactive",
            "--api-base",
            "https://shop.example.com",
        ])
        .expect("valid arguments");
        assert_eq!(cli.api_base.as_deref(), Some("https://shop.example.com"));
        assert!(matches!(
            cli.command,
            Command::Products { ref slug, filter: ProductFilter::Inactive } if slug == "blue-sofa-99001"
        ));
    }

    #[test]
    fn rejects_unknown_filter() {
        let parsed = Cli::try_parse_from(["storedesk", "products", "x-1", "--filter", "archived"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_product_takes_positional_id() {
        let cli = Cli::try_parse_from(["storedesk", "add-product", "blue-sofa-99001", "12345"]).expect("valid");
        assert!(matches!(
            cli.command,
            Command::AddProduct { ref product_id, .. } if product_id == "12345"
        ));
    }
}
