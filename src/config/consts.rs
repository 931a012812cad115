// src/config/consts.rs

// Marketplace
pub const MARKETPLACE_HOST: &str = "www.amazon.com";
pub const TAG_PARAM: &str = "tag";
pub const DEFAULT_KEYWORDS: &str = "dj headphones";
pub const DEFAULT_MAX_PRICE_CENTS: u32 = 10_000; // $100.00
pub const SEARCH_SORT: &str = "price-asc-rank";

// Environment
pub const TAG_ENV_VAR: &str = "AMZ_PARTNER_TAG";

// Files
pub const DEFAULT_INPUT_FILE: &str = "asin_list.json";
pub const DEFAULT_OUT_DIR: &str = ".";
pub const PAGE_FILE: &str = "index.html";
pub const SNAPSHOT_FILE: &str = "products.json";

// Page
pub const PAGE_TITLE: &str = "All DJ headphones under $100 \u{2014} lowest price first";
pub const PAGE_DESC: &str = "Curated list of DJ headphones commonly priced under $100 on Amazon US. \
    Because Product Advertising API access is not enabled yet, this page does not display live prices. \
    Use the buttons to view current prices on Amazon.";
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%2296%22 height=%2296%22%3E%3Crect width=%2296%22 height=%2296%22 fill=%22%23eee%22/%3E%3C/svg%3E";
pub const UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
