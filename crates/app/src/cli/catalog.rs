use clap::Args;
use jiff::Timestamp;
use petalo::products::ProductKind;
use petalo_app::context::AppContext;

use crate::cli::table;

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Product kind (flowers, jewelry)
    #[arg(long)]
    kind: ProductKind,

    /// Only list products in this category
    #[arg(long)]
    category: Option<String>,
}

pub(crate) async fn run(ctx: &AppContext, args: CatalogArgs) -> Result<(), String> {
    let listings = ctx
        .catalog
        .catalog(args.kind, args.category, Timestamp::now())
        .await
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    if listings.is_empty() {
        println!("no {} products", args.kind);
        return Ok(());
    }

    println!("{}", table::listings(&listings, &ctx.handoff));

    Ok(())
}
