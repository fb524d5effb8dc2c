use clap::Args;
use jiff::Timestamp;
use petalo_app::context::AppContext;
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

#[derive(Debug, Args)]
pub(crate) struct PromotionsArgs {
    /// Only list promotions that are live right now
    #[arg(long)]
    live: bool,
}

pub(crate) async fn run(ctx: &AppContext, args: PromotionsArgs) -> Result<(), String> {
    let promotions = ctx
        .catalog
        .promotions()
        .await
        .map_err(|error| format!("failed to load promotions: {error}"))?;

    let now = Timestamp::now();

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Type", "Value", "Applies to", "From", "Until", "Live"]);

    for promotion in &promotions {
        let live = promotion.is_live_at(now);

        if args.live && !live {
            continue;
        }

        builder.push_record([
            promotion.id.clone(),
            promotion.name.clone(),
            promotion.discount_type.to_string(),
            promotion.discount_value.to_string(),
            promotion.applies_to.to_string(),
            promotion.schedule.start.map(|date| date.to_string()).unwrap_or_default(),
            promotion.schedule.end.map(|date| date.to_string()).unwrap_or_default(),
            if live { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    println!("{table}");

    Ok(())
}
