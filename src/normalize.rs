// src/normalize.rs
//! Record normalization.
//!
//! Turns the raw input objects into the canonical product list:
//! - the id comes from `RecordSchema::id_field`, trimmed;
//! - records with an empty id are dropped;
//! - the first record for an id wins, later ones are dropped (not merged);
//! - output order is first-occurrence order;
//! - every field is present, empty when the input lacks it.
//!
//! Nothing here fails. Bad rows degrade to empty fields or are left out.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::schema::{Field, RecordSchema};
use crate::core::sanitize::field_text;

/// One input object, as parsed from the JSON array.
pub type RawRecord = Map<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub image_url: String,
    pub source_url: String,
}

impl ProductRecord {
    /// Record with only an id; name gets its placeholder.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self { name: placeholder_name(&id), id, ..Self::default() }
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }

    pub fn source(&self) -> Option<&str> {
        non_empty(&self.source_url)
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::PriceRange => self.price_range = value,
            Field::ImageUrl => self.image_url = value,
            Field::SourceUrl => self.source_url = value,
        }
    }
}

pub fn placeholder_name(id: &str) -> String {
    format!("Product ({id})")
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Normalize `raw` into unique, ordered product records.
pub fn normalize(raw: &[RawRecord], schema: &RecordSchema) -> Vec<ProductRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for (row, record) in raw.iter().enumerate() {
        let id = field_text(record.get(schema.id_field()));
        if id.is_empty() {
            logd!("normalize: row {row} has no {:?}, skipped", schema.id_field());
            continue;
        }
        if seen.contains(&id) {
            logd!("normalize: row {row} repeats id {id}, skipped");
            continue;
        }

        let mut product = ProductRecord { id: id.clone(), ..ProductRecord::default() };
        for (field, key) in schema.fields() {
            product.set(field, field_text(record.get(key)));
        }
        if product.name.is_empty() {
            product.name = placeholder_name(&id);
        }

        seen.insert(id);
        out.push(product);
    }

    out
}
