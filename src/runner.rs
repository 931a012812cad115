// src/runner.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{
    config::{BuildOptions, consts::UPDATED_FORMAT},
    error::ShortlistResult,
    html::{self, ListedProduct, PageInput, SearchCta},
    link,
    normalize::normalize,
    progress::{NullProgress, Progress},
    store::{self, Snapshot, SnapshotEntry},
};

/// Summary of what one build produced.
#[derive(Debug)]
pub struct BuildSummary {
    /// Objects read from the input file.
    pub records_read: usize,
    /// Products on the page after dedup.
    pub products: usize,
    /// Records left out (no id, or a repeated id).
    pub skipped: usize,
    pub files_written: Vec<PathBuf>,
}

/// Build the page and snapshot, stamped with the current time.
pub fn run(opts: &BuildOptions, progress: Option<&mut dyn Progress>) -> ShortlistResult<BuildSummary> {
    run_at(opts, Utc::now(), progress)
}

/// Same as `run` with an explicit build time.
pub fn run_at(
    opts: &BuildOptions,
    now: DateTime<Utc>,
    progress: Option<&mut dyn Progress>,
) -> ShortlistResult<BuildSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let result = build(opts, now, progress);
    progress.finish();
    result
}

fn build(opts: &BuildOptions, now: DateTime<Utc>, progress: &mut dyn Progress) -> ShortlistResult<BuildSummary> {
    logf!("build: reading {}", opts.input.display());
    let raw = store::load_records(&opts.input)?;
    let products = normalize(&raw, &opts.schema);
    let skipped = raw.len() - products.len();
    logf!("build: {} record(s), {} product(s), {} skipped", raw.len(), products.len(), skipped);
    if products.is_empty() {
        progress.log(&format!("No products in {}; page will show the empty-list hint.", opts.input.display()));
    }

    progress.begin(products.len());
    let mut entries = Vec::with_capacity(products.len());
    for product in products {
        let link = link::link_for(&product, &opts.tag, &opts.marketplace);
        logd!("link: {} -> {}", product.id, link);
        progress.item_done(&product.id);
        entries.push(ListedProduct { product, link });
    }

    let search = opts.search.enabled.then(|| SearchCta {
        url: link::search_url(&opts.search, &opts.tag, &opts.marketplace),
        label: format!(
            "View Amazon results under {} (price low\u{2192}high)",
            opts.search.max_price_label()
        ),
    });

    let updated = now.format(UPDATED_FORMAT).to_string();
    let input_name = opts.input_display();
    let page = html::render_page(&PageInput {
        meta: &opts.page,
        entries: &entries,
        search: search.as_ref(),
        updated: &updated,
        input_name: &input_name,
    });

    let page_path = crate::file::write_text(&opts.page_path(), &page)?;
    progress.log(&format!("Wrote {}", page_path.display()));

    let snapshot = Snapshot::new(
        &updated,
        entries
            .iter()
            .map(|e| SnapshotEntry { product: &e.product, link: &e.link })
            .collect(),
    );
    let snapshot_path = store::save_snapshot(&opts.snapshot_path(), &snapshot)?;
    progress.log(&format!("Wrote {}", snapshot_path.display()));

    Ok(BuildSummary {
        records_read: raw.len(),
        products: entries.len(),
        skipped,
        files_written: vec![page_path, snapshot_path],
    })
}
