// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod schema;
pub mod tag;

pub use options::{BuildOptions, Marketplace, PageMeta, SearchOptions};
pub use schema::{Field, RecordSchema, SchemaPreset};
pub use tag::TrackingTag;
