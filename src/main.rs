use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use research_presence::search::{AdsClient, AdsFilters, GoogleClient};
use research_presence::{collect_presence, load_names, render_scatter, write_csv, Cli, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "research_presence=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Config and name loading are fatal on error: nothing to do without them.
    let settings = Settings::load(&cli.config)?;
    let names = load_names(&cli.names)?;
    info!(count = names.len(), "Loaded researcher names");

    let ads = AdsClient::new(&settings.ads_token);
    let google = settings
        .google_credentials()
        .map(|(key, cx)| GoogleClient::new(key, cx));
    if google.is_none() {
        info!("Google credentials not configured, web counts will be zero");
    }

    let filters = AdsFilters {
        refereed: cli.ads_refereed,
        aff: cli.ads_aff.clone(),
        year_range: cli.ads_year.clone(),
        orcid: cli.ads_orcid.clone(),
    };

    let records = collect_presence(&names, &ads, google.as_ref(), &filters).await;

    write_csv(&cli.out_csv, &records)?;
    render_scatter(&cli.out_png, &records)?;
    info!(
        csv = %cli.out_csv.display(),
        png = %cli.out_png.display(),
        "Done. Wrote report and scatter plot"
    );

    Ok(())
}
