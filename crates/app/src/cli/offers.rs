use clap::Args;
use jiff::Timestamp;
use petalo::products::ProductKind;
use petalo_app::context::AppContext;

use crate::cli::table;

#[derive(Debug, Args)]
pub(crate) struct OffersArgs {
    /// Only list offers of this product kind
    #[arg(long)]
    kind: Option<ProductKind>,
}

pub(crate) async fn run(ctx: &AppContext, args: OffersArgs) -> Result<(), String> {
    let listings = ctx
        .catalog
        .offers(args.kind, Timestamp::now())
        .await
        .map_err(|error| format!("failed to load offers: {error}"))?;

    if listings.is_empty() {
        println!("no active offers");
        return Ok(());
    }

    println!("{}", table::listings(&listings, &ctx.handoff));

    Ok(())
}
