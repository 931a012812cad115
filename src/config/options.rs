// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use super::schema::RecordSchema;
use super::tag::TrackingTag;

/// Everything one build needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub tag: TrackingTag,
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub schema: RecordSchema,
    pub marketplace: Marketplace,
    pub search: SearchOptions,
    pub page: PageMeta,
}

impl BuildOptions {
    /// Defaults for everything but the tag, which has none.
    pub fn new(tag: TrackingTag) -> Self {
        Self {
            tag,
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            schema: RecordSchema::default(),
            marketplace: Marketplace::default(),
            search: SearchOptions::default(),
            page: PageMeta::default(),
        }
    }

    pub fn page_path(&self) -> PathBuf {
        self.out_dir.join(PAGE_FILE)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.out_dir.join(SNAPSHOT_FILE)
    }

    /// Input file name as shown to readers of the page.
    pub fn input_display(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marketplace {
    host: String,
}

impl Default for Marketplace {
    fn default() -> Self {
        Self { host: s!(MARKETPLACE_HOST) }
    }
}

impl Marketplace {
    pub fn new(host: impl AsRef<str>) -> Self {
        let host = host.as_ref().trim().trim_end_matches('/');
        let host = host
            .strip_prefix("https://")
            .or_else(|| host.strip_prefix("http://"))
            .unwrap_or(host);
        Self { host: s!(host) }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub enabled: bool,
    pub keywords: String,
    pub max_price_cents: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            keywords: s!(DEFAULT_KEYWORDS),
            max_price_cents: DEFAULT_MAX_PRICE_CENTS,
        }
    }
}

impl SearchOptions {
    /// "$100" for 10000, "$49.99" for 4999.
    pub fn max_price_label(&self) -> String {
        let dollars = self.max_price_cents / 100;
        let cents = self.max_price_cents % 100;
        if cents == 0 { format!("${dollars}") } else { format!("${dollars}.{cents:02}") }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self { title: s!(PAGE_TITLE), description: s!(PAGE_DESC) }
    }
}
