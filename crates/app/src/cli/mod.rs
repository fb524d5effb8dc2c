use clap::{Parser, Subcommand};
use petalo_app::{config::AppConfig, context::AppContext, observability};

mod catalog;
mod categories;
mod offers;
mod page;
mod promotions;
mod quote;
mod table;

#[derive(Debug, Parser)]
#[command(name = "petalo", about = "Petalo storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Priced catalog page for one product kind
    Catalog(catalog::CatalogArgs),
    /// Products with at least one live promotion
    Offers(offers::OffersArgs),
    /// Quote request message and chat link for one product
    Quote(quote::QuoteArgs),
    /// Categories of one product kind
    Categories(categories::CategoriesArgs),
    /// Stored promotions and whether they are live
    Promotions(promotions::PromotionsArgs),
    /// Editable copy of a storefront page
    Page(page::PageArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let ctx = AppContext::from_config(&self.config)
            .await
            .map_err(|error| format!("failed to start: {error}"))?;

        match self.command {
            Commands::Catalog(args) => catalog::run(&ctx, args).await,
            Commands::Offers(args) => offers::run(&ctx, args).await,
            Commands::Quote(args) => quote::run(&ctx, args).await,
            Commands::Categories(args) => categories::run(&ctx, args).await,
            Commands::Promotions(args) => promotions::run(&ctx, args).await,
            Commands::Page(args) => page::run(&ctx, args).await,
        }
    }
}
