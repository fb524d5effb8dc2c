use clap::Args;
use jiff::Timestamp;
use petalo::{
    catalog::{CatalogFilter, category_filters},
    products::ProductKind,
};
use petalo_app::context::AppContext;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CategoriesArgs {
    /// Product kind (flowers, jewelry)
    #[arg(long)]
    kind: ProductKind,
}

pub(crate) async fn run(ctx: &AppContext, args: CategoriesArgs) -> Result<(), String> {
    let (categories, listings) = tokio::try_join!(
        ctx.catalog.categories(args.kind),
        ctx.catalog.catalog(args.kind, None, Timestamp::now()),
    )
    .map_err(|error| format!("failed to load categories: {error}"))?;

    let mut builder = Builder::default();

    builder.push_record(["Filter", "Products", "On offer"]);

    for filter in category_filters(&categories, args.kind) {
        let label = match filter {
            CatalogFilter::Category { name, .. } => name.to_string(),
            CatalogFilter::Kind(kind) => format!("all {kind}"),
            CatalogFilter::All => "all".to_string(),
        };

        let shown: Vec<_> = listings
            .iter()
            .filter(|listing| filter.matches(&listing.product))
            .collect();
        let on_offer = shown.iter().filter(|listing| listing.has_discount).count();

        builder.push_record([label, shown.len().to_string(), on_offer.to_string()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..3), Alignment::right());

    println!("{table}");

    Ok(())
}
