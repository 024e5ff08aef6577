//! Shopfront CLI - Render storefront view helpers from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Countries available at checkout (uses SHOPFRONT_CHECKOUT_ZONE unless --zone)
//! shopfront countries --catalog catalog.yaml --zone Domestic
//!
//! # Flash banners
//! shopfront flash -m notice=ok -m foo=foo -m bar=bar --ignore bar
//!
//! # Tracking link
//! shopfront tracking --number 123 --url 'http://g.c/?t=123'
//!
//! # Meta description and tags
//! shopfront meta-description "A very long product description..."
//! shopfront meta-tags --product product.yaml
//!
//! # Timestamps
//! shopfront pretty-time 2012-05-06T13:33
//!
//! # Image helpers
//! shopfront image product_image --product product.yaml
//! shopfront image-styles
//! ```
//!
//! Configuration is read from the environment (and `.env`); see
//! `shopfront_storefront::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopfront_storefront::{StorefrontConfig, ViewContext};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront view helper CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries available at checkout
    Countries {
        /// YAML catalog of countries, states and zones
        #[arg(short, long)]
        catalog: PathBuf,

        /// Checkout zone name (overrides `SHOPFRONT_CHECKOUT_ZONE`)
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Render flash message banners
    Flash {
        /// Message as CATEGORY=TEXT (repeatable)
        #[arg(short, long = "message")]
        messages: Vec<String>,

        /// Category to skip (repeatable)
        #[arg(short, long)]
        ignore: Vec<String>,
    },
    /// Render a shipment tracking link
    Tracking {
        /// Carrier tracking number
        #[arg(short, long)]
        number: Option<String>,

        /// Carrier tracking page URL
        #[arg(short, long)]
        url: Option<String>,

        /// Treat the shipment as having no shipping method
        #[arg(long)]
        no_shipping_method: bool,

        /// Extra anchor attribute as NAME=VALUE (repeatable)
        #[arg(short, long = "attr")]
        attrs: Vec<String>,
    },
    /// Truncate text for a meta description
    MetaDescription {
        text: String,

        /// Maximum length (default: configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Render `<meta>` tags for a page
    MetaTags {
        /// YAML product file
        #[arg(short, long)]
        product: Option<PathBuf>,
    },
    /// Format a timestamp for display
    PrettyTime { timestamp: String },
    /// Render an image helper such as `product_image`
    Image {
        helper: String,

        /// YAML product file
        #[arg(short, long)]
        product: PathBuf,

        /// Extra img attribute as NAME=VALUE (repeatable)
        #[arg(short, long = "attr")]
        attrs: Vec<String>,
    },
    /// List registered image helpers
    ImageStyles,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");
    let context = ViewContext::new(config);

    match cli.command {
        Commands::Countries { catalog, zone } => {
            commands::catalog::countries(&context, &catalog, zone)?;
        }
        Commands::Flash { messages, ignore } => commands::render::flash(&messages, &ignore)?,
        Commands::Tracking {
            number,
            url,
            no_shipping_method,
            attrs,
        } => commands::render::tracking(number, url, no_shipping_method, &attrs)?,
        Commands::MetaDescription { text, limit } => {
            commands::render::description(&context, &text, limit);
        }
        Commands::MetaTags { product } => {
            commands::render::meta_tags(&context, product.as_deref())?;
        }
        Commands::PrettyTime { timestamp } => commands::render::pretty_time(&timestamp)?,
        Commands::Image {
            helper,
            product,
            attrs,
        } => commands::render::image(&context, &helper, &product, &attrs)?,
        Commands::ImageStyles => commands::render::image_styles(&context),
    }
    Ok(())
}
