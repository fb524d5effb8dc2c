use petalo_app::{domain::catalog::models::Listing, handoff::Handoff};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

pub(crate) fn listings(listings: &[Listing], handoff: &Handoff) -> String {
    let mut builder = Builder::default();

    builder.push_record(["", "Product", "Category", "Price", "Final", "Off", "Promotions"]);

    for (idx, listing) in listings.iter().enumerate() {
        let (final_price, off) = if listing.has_discount {
            (
                handoff.format_price(listing.final_price),
                format!("{}%", listing.discount_percentage_label()),
            )
        } else {
            (String::new(), String::new())
        };

        let promotions = listing
            .applied_promotions
            .iter()
            .map(|promotion| promotion.name.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        builder.push_record([
            format!("#{:<3}", idx + 1),
            listing.product.name.clone(),
            listing.product.category.clone(),
            handoff.format_price(listing.original_price),
            final_price,
            off,
            promotions,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    table.to_string()
}
