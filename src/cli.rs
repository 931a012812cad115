// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{
    DEFAULT_INPUT_FILE, DEFAULT_KEYWORDS, DEFAULT_MAX_PRICE_CENTS, DEFAULT_OUT_DIR, TAG_ENV_VAR,
};
use crate::config::{BuildOptions, Marketplace, PageMeta, RecordSchema, SchemaPreset, TrackingTag};
use crate::error::{ShortlistError, ShortlistResult};
use crate::progress::{ConsoleProgress, Progress};
use crate::runner::{self, BuildSummary};

#[derive(Parser, Debug)]
#[command(name = "shortlist")]
#[command(about = "Build the affiliate shortlist page (index.html + products.json)")]
pub struct Cli {
    /// JSON array of product objects
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Directory for index.html and products.json
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Affiliate tracking tag
    #[arg(long, env = TAG_ENV_VAR, hide_env_values = true)]
    pub tag: Option<String>,

    /// Field naming convention: asin-list, catalog or amazon
    #[arg(long, default_value = "asin-list", value_parser = parse_preset)]
    pub schema: SchemaPreset,

    /// Input key holding the product id (overrides the preset)
    #[arg(long)]
    pub id_field: Option<String>,

    /// Map an output field to an input key, e.g. --field name=title
    #[arg(long = "field", value_name = "FIELD=KEY")]
    pub fields: Vec<String>,

    /// Marketplace host
    #[arg(long)]
    pub marketplace: Option<String>,

    /// Search keywords for the call-to-action link
    #[arg(long, default_value = DEFAULT_KEYWORDS)]
    pub keywords: String,

    /// Price ceiling for the search link, in cents
    #[arg(long, default_value_t = DEFAULT_MAX_PRICE_CENTS)]
    pub max_price_cents: u32,

    /// Leave the search call-to-action off the page
    #[arg(long)]
    pub no_search: bool,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_preset(s: &str) -> Result<SchemaPreset, String> {
    s.parse().map_err(|e: ShortlistError| e.to_string())
}

impl Cli {
    /// Resolve into build options. Fails first on a missing tag.
    pub fn into_options(self) -> ShortlistResult<BuildOptions> {
        let tag = TrackingTag::new(self.tag.unwrap_or_default())?;
        let mut opts = BuildOptions::new(tag);

        opts.input = self.input;
        opts.out_dir = self.out_dir;

        let mut schema = RecordSchema::preset(self.schema);
        if let Some(id) = self.id_field {
            let id = id.trim();
            if id.is_empty() {
                return Err(ShortlistError::InvalidOption(s!("--id-field must not be blank")));
            }
            schema.set_id_field(id);
        }
        for mapping in &self.fields {
            schema.apply_override(mapping)?;
        }
        opts.schema = schema;

        if let Some(host) = self.marketplace {
            opts.marketplace = Marketplace::new(host);
        }
        opts.search.enabled = !self.no_search;
        opts.search.keywords = self.keywords;
        opts.search.max_price_cents = self.max_price_cents;

        let defaults = PageMeta::default();
        opts.page = PageMeta {
            title: self.title.unwrap_or(defaults.title),
            description: self.description.unwrap_or(defaults.description),
        };
        Ok(opts)
    }
}

/// Parse args, load `.env`, check the tag, build.
pub fn run() -> ShortlistResult<BuildSummary> {
    // A missing .env is normal; only the variables matter.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.into_options()?;
    let mut console = ConsoleProgress::stderr();
    let summary = runner::run(&opts, Some(&mut console as &mut dyn Progress)).inspect_err(|e| {
        loge!("build failed: {e}");
    })?;
    logf!(
        "done: {} product(s) listed, {} record(s) skipped",
        summary.products,
        summary.skipped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shortlist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn blank_tag_stops_before_anything_else() {
        let cli = parse(&["--tag", "   ", "--field", "bogus"]);
        assert!(matches!(cli.into_options(), Err(ShortlistError::MissingTrackingTag)));
    }

    #[test]
    fn flags_flow_into_options() {
        let cli = parse(&[
            "--tag", "mytag-20",
            "-i", "data/products.json",
            "-o", "site",
            "--schema", "amazon",
            "--field", "name=title",
            "--marketplace", "https://www.amazon.co.uk/",
            "--max-price-cents", "4999",
            "--no-search",
        ]);
        let opts = cli.into_options().unwrap();

        assert_eq!(opts.tag.as_str(), "mytag-20");
        assert_eq!(opts.input, PathBuf::from("data/products.json"));
        assert_eq!(opts.schema.id_field(), "amazon_asin");
        assert_eq!(opts.schema.key_for(crate::config::Field::Name), Some("title"));
        assert_eq!(opts.marketplace.host(), "www.amazon.co.uk");
        assert_eq!(opts.search.max_price_cents, 4999);
        assert!(!opts.search.enabled);
    }

    #[test]
    fn blank_id_field_is_rejected() {
        let cli = parse(&["--tag", "mytag-20", "--id-field", "   "]);
        assert!(matches!(cli.into_options(), Err(ShortlistError::InvalidOption(_))));

        let cli = parse(&["--tag", "mytag-20", "--id-field", " sku "]);
        assert_eq!(cli.into_options().unwrap().schema.id_field(), "sku");
    }

    #[test]
    fn unknown_preset_is_a_parse_error() {
        let res = Cli::try_parse_from(["shortlist", "--tag", "t", "--schema", "ebay"]);
        assert!(res.is_err());
    }
}
