use clap::Args;
use petalo_app::{context::AppContext, documents::Page};
use serde_json::Value;

#[derive(Debug, Args)]
pub(crate) struct PageArgs {
    /// Page to show (home, about)
    #[arg(long)]
    page: Page,
}

pub(crate) async fn run(ctx: &AppContext, args: PageArgs) -> Result<(), String> {
    let content = ctx
        .admin
        .page_content(args.page)
        .await
        .map_err(|error| format!("failed to load page content: {error}"))?;

    let fields = content
        .to_fields()
        .map_err(|error| format!("failed to encode page content: {error}"))?;

    let rendered = serde_json::to_string_pretty(&Value::Object(fields))
        .map_err(|error| format!("failed to render page content: {error}"))?;

    println!("{rendered}");

    Ok(())
}
