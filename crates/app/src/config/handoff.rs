//! Hand-off Config

use clap::Args;

/// Quote hand-off settings.
#[derive(Debug, Args)]
pub struct HandoffConfig {
    /// Shop phone number that receives quote requests
    #[arg(long, env = "PETALO_PHONE", default_value = "56993177866")]
    pub phone: String,

    /// ISO currency code prices are shown in
    #[arg(long, env = "PETALO_CURRENCY", default_value = "CLP")]
    pub currency: String,
}
