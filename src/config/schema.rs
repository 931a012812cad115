// src/config/schema.rs
//! Record schemas: which input keys feed which product fields.
//!
//! The input files seen in the wild differ only in naming (`asin` vs
//! `amazon_asin`, `name` vs `title`, ...). A `RecordSchema` captures one naming
//! convention so the normalizer stays the same for all of them.

use std::fmt;
use std::str::FromStr;

use crate::error::{ShortlistError, ShortlistResult};

/// Output fields of a `ProductRecord` that are read from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    PriceRange,
    ImageUrl,
    SourceUrl,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Description,
        Field::PriceRange,
        Field::ImageUrl,
        Field::SourceUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::PriceRange => "price_range",
            Field::ImageUrl => "image_url",
            Field::SourceUrl => "source_url",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ShortlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Field::Name),
            "description" | "summary" => Ok(Field::Description),
            "price_range" | "pricerange" => Ok(Field::PriceRange),
            "image_url" | "imageurl" => Ok(Field::ImageUrl),
            "source_url" | "sourceurl" | "url" => Ok(Field::SourceUrl),
            other => Err(ShortlistError::InvalidOption(format!("unknown field: {other}"))),
        }
    }
}

/// Named field-naming conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchemaPreset {
    /// `asin_list.json`: `{"asin": ..., "name": ..., "url": ...}`
    #[default]
    AsinList,
    /// Hand-curated catalogs: `{"asin": ..., "title": ..., "link": ...}`
    Catalog,
    /// Exports keyed by `amazon_asin`.
    Amazon,
}

impl FromStr for SchemaPreset {
    type Err = ShortlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asin-list" | "asin_list" | "asin" => Ok(SchemaPreset::AsinList),
            "catalog" => Ok(SchemaPreset::Catalog),
            "amazon" | "amazon-asin" | "amazon_asin" => Ok(SchemaPreset::Amazon),
            other => Err(ShortlistError::InvalidOption(format!("unknown schema preset: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSchema {
    id_field: String,
    fields: Vec<(Field, String)>,
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self::preset(SchemaPreset::default())
    }
}

impl RecordSchema {
    pub fn new(id_field: impl Into<String>, fields: Vec<(Field, String)>) -> Self {
        let mut schema = Self { id_field: id_field.into(), fields: Vec::with_capacity(fields.len()) };
        for (field, key) in fields {
            schema.set_key(field, key);
        }
        schema
    }

    pub fn preset(preset: SchemaPreset) -> Self {
        match preset {
            SchemaPreset::AsinList => Self::new("asin", field_map![
                Name => "name",
                Description => "description",
                PriceRange => "price_range",
                ImageUrl => "image_url",
                SourceUrl => "url",
            ]),
            SchemaPreset::Catalog => Self::new("asin", field_map![
                Name => "title",
                Description => "summary",
                PriceRange => "price",
                ImageUrl => "image",
                SourceUrl => "link",
            ]),
            SchemaPreset::Amazon => Self::new("amazon_asin", field_map![
                Name => "name",
                Description => "summary",
                PriceRange => "price_range",
                ImageUrl => "image_url",
                SourceUrl => "amazon_url",
            ]),
        }
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub fn set_id_field(&mut self, key: impl Into<String>) {
        self.id_field = key.into();
    }

    /// Input key for `field`, if the schema maps it at all.
    pub fn key_for(&self, field: Field) -> Option<&str> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, k)| k.as_str())
    }

    /// Map `field` to `key`, replacing any earlier mapping but keeping its position.
    pub fn set_key(&mut self, field: Field, key: impl Into<String>) {
        let key = key.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = key,
            None => self.fields.push((field, key)),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, k)| (*f, k.as_str()))
    }

    /// Apply a `FIELD=KEY` override, e.g. `name=title`.
    pub fn apply_override(&mut self, mapping: &str) -> ShortlistResult<()> {
        let (field, key) = mapping
            .split_once('=')
            .ok_or_else(|| ShortlistError::InvalidOption(format!("expected FIELD=KEY, got {mapping:?}")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ShortlistError::InvalidOption(format!("empty input key in {mapping:?}")));
        }
        if field.trim().eq_ignore_ascii_case("id") {
            self.set_id_field(key);
        } else {
            self.set_key(field.parse()?, key);
        }
        Ok(())
    }
}
