use std::path::PathBuf;

use clap::Parser;

/// Count ADS papers and Google hits for a list of researchers.
#[derive(Debug, Parser)]
#[command(name = "research-presence", version, about)]
pub struct Cli {
    /// Path to a TXT file (one name per line) or CSV file with a 'name' column
    #[arg(long = "names", value_name = "FILE")]
    pub names: PathBuf,

    /// Path to a JSON or YAML credentials file
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Output CSV report
    #[arg(long = "out_csv", value_name = "FILE", default_value = "output.csv")]
    pub out_csv: PathBuf,

    /// Output scatter plot PNG
    #[arg(long = "out_png", value_name = "FILE", default_value = "scatter.png")]
    pub out_png: PathBuf,

    /// Restrict ADS counts to refereed publications
    #[arg(long = "ads_refereed")]
    pub ads_refereed: bool,

    /// Restrict ADS counts to an affiliation substring
    #[arg(long = "ads_aff", value_name = "AFFILIATION")]
    pub ads_aff: Option<String>,

    /// Restrict ADS counts to a year range, e.g. "2015-2020"
    #[arg(long = "ads_year", value_name = "RANGE")]
    pub ads_year: Option<String>,

    /// Restrict ADS counts to an ORCID identifier
    #[arg(long = "ads_orcid", value_name = "ORCID")]
    pub ads_orcid: Option<String>,
}
