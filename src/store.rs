// src/store.rs
use std::{fs, path::{Path, PathBuf}};

use serde::Serialize;
use serde_json::Value;

use crate::error::{ShortlistError, ShortlistResult};
use crate::file::write_text;
use crate::normalize::{ProductRecord, RawRecord};

/// Load the input file: a JSON array of objects.
/// Elements that are not objects are skipped; anything else wrong is fatal.
pub fn load_records(path: &Path) -> ShortlistResult<Vec<RawRecord>> {
    let text = fs::read_to_string(path).map_err(|source| ShortlistError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| ShortlistError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(ShortlistError::InputShape { path: path.to_path_buf() });
    };

    let total = items.len();
    let records: Vec<RawRecord> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

    if records.len() < total {
        logd!("store: {} non-object entries ignored in {}", total - records.len(), path.display());
    }
    Ok(records)
}

/// Debug artifact written next to the page.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub updated: &'a str,
    pub count: usize,
    pub asins: Vec<&'a str>,
    pub products: Vec<SnapshotEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotEntry<'a> {
    #[serde(flatten)]
    pub product: &'a ProductRecord,
    pub link: &'a str,
}

impl<'a> Snapshot<'a> {
    pub fn new(updated: &'a str, products: Vec<SnapshotEntry<'a>>) -> Self {
        Self {
            updated,
            count: products.len(),
            asins: products.iter().map(|e| e.product.id.as_str()).collect(),
            products,
        }
    }
}

pub fn save_snapshot(path: &Path, snapshot: &Snapshot<'_>) -> ShortlistResult<PathBuf> {
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    write_text(path, &json)
}
