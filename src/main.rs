use std::io::IsTerminal;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use stylehub::render::spinner;
use stylehub::{Config, FetchStatus, ListQuery, Storefront};

/// Browse the StyleHub catalogue from the terminal
#[derive(Parser)]
#[command(name = "stylehub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the seller API (overrides STYLEHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Don't show the loading spinner
    #[arg(long, global = true)]
    no_spinner: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product listing
    List {
        /// Sort directive passed to the API
        #[arg(long)]
        sort_by: Option<String>,

        /// Only show products from this category
        #[arg(long)]
        category_id: Option<String>,

        /// Mark these product ids as wishlisted
        #[arg(long, num_args = 1..)]
        wishlist: Vec<String>,
    },
    /// Show a single product
    Show {
        id: String,

        /// 1-based image to select in the gallery
        #[arg(long)]
        image: Option<usize>,

        /// Quantity to put in the selector (clamped to 1-9)
        #[arg(long)]
        quantity: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = Config::load(cli.api_url)?;
    let storefront = Storefront::new(&config)?;
    let show_spinner = !cli.no_spinner && std::io::stderr().is_terminal();

    match cli.command {
        Commands::List {
            sort_by,
            category_id,
            wishlist,
        } => {
            let page = storefront.listing_page();
            let query = ListQuery {
                sort_by,
                category_id,
            };

            let pb = spinner("Loading products...", show_spinner);
            let result = page.mount(&query).await;
            pb.finish_and_clear();

            for id in &wishlist {
                storefront.store().add_to_wishlist(id);
            }

            println!("{}", page.render());
            result?;
        }
        Commands::Show {
            id,
            image,
            quantity,
        } => {
            let mut page = storefront.detail_page();

            let pb = spinner("Loading product...", show_spinner);
            page.navigate(&id).await;
            pb.finish_and_clear();

            if let Some(position) = image
                && !page.select_image(position)
            {
                warn!("Product {id} has no image {position}");
            }
            if let Some(input) = quantity {
                let value = page.quantity_mut().set_from_input(&input);
                info!("Quantity set to {value}");
            }

            println!("{}", page.render());

            if let FetchStatus::Error(message) = page.state().status {
                bail!("could not load product {id}: {message}");
            }
        }
    }

    Ok(())
}
