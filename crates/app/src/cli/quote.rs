use clap::Args;
use jiff::Timestamp;
use petalo::products::ProductKind;
use petalo_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Product kind (flowers, jewelry)
    #[arg(long)]
    kind: ProductKind,

    /// Product document id
    #[arg(long)]
    id: String,
}

pub(crate) async fn run(ctx: &AppContext, args: QuoteArgs) -> Result<(), String> {
    let listing = ctx
        .catalog
        .priced_product(args.kind, &args.id, Timestamp::now())
        .await
        .map_err(|error| format!("failed to price product: {error}"))?;

    println!("{}", ctx.handoff.message(&listing));
    println!();
    println!("{}", ctx.handoff.link(&listing));

    Ok(())
}
