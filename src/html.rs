// src/html.rs
// Page rendering. Every interpolated value goes through `esc`.

use std::borrow::Cow;
use std::fmt::Write;

use crate::config::PageMeta;
use crate::config::consts::PLACEHOLDER_IMAGE;
use crate::normalize::ProductRecord;

/// A product and its outbound link, as shown on the page.
#[derive(Clone, Debug)]
pub struct ListedProduct {
    pub product: ProductRecord,
    pub link: String,
}

/// Search call-to-action card.
#[derive(Clone, Debug)]
pub struct SearchCta {
    pub url: String,
    pub label: String,
}

pub struct PageInput<'a> {
    pub meta: &'a PageMeta,
    pub entries: &'a [ListedProduct],
    pub search: Option<&'a SearchCta>,
    pub updated: &'a str,
    /// Input file name, for the empty-list hint.
    pub input_name: &'a str,
}

/// Escape `& < > " '` for text and quoted attributes alike.
pub fn esc(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}

pub fn render_page(input: &PageInput<'_>) -> String {
    let title = esc(&input.meta.title);
    let desc = esc(&input.meta.description);

    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "  <title>{title}</title>");
    let _ = writeln!(out, "  <meta name=\"description\" content=\"{desc}\">");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");

    out.push_str("  <header>\n");
    let _ = writeln!(out, "    <h1>{title}</h1>");
    let _ = writeln!(out, "    <p>{desc}</p>");
    let _ = writeln!(out, "    <p class=\"meta\">Daily build: {}</p>", esc(input.updated));
    out.push_str("  </header>\n\n  <main>\n");

    if let Some(cta) = input.search {
        out.push_str("    <div class=\"card\">\n");
        out.push_str("      <p class=\"note\"><strong>Note:</strong> Live prices require Amazon Product Advertising API access. \
Until then, use the buttons below to view current prices on Amazon.</p>\n");
        let _ = writeln!(
            out,
            "      <p><a class=\"btn\" href=\"{}\" rel=\"nofollow sponsored\">{}</a></p>",
            esc(&cta.url),
            esc(&cta.label)
        );
        out.push_str("    </div>\n\n");
    }

    out.push_str("    <div class=\"card\">\n      <table>\n        <thead>\n          <tr>\n");
    out.push_str("            <th></th>\n            <th>Product</th>\n            <th>ASIN</th>\n            <th></th>\n");
    out.push_str("          </tr>\n        </thead>\n        <tbody>\n");
    out.push_str(&render_rows(input.entries, input.input_name));
    out.push_str("\n        </tbody>\n      </table>\n    </div>\n  </main>\n\n");

    out.push_str(FOOTER);
    out.push_str("</body>\n</html>\n");
    out
}

pub fn render_rows(entries: &[ListedProduct], input_name: &str) -> String {
    if entries.is_empty() {
        return format!(
            "          <tr><td colspan=\"4\">No ASINs found. Add them to {}.</td></tr>",
            esc(input_name)
        );
    }
    entries.iter().map(render_row).collect::<Vec<_>>().join("\n")
}

fn render_row(entry: &ListedProduct) -> String {
    let p = &entry.product;
    let link = esc(&entry.link);
    let name = esc(&p.name);
    let img = esc(p.image().unwrap_or(PLACEHOLDER_IMAGE));

    let mut details = String::new();
    if !p.description.is_empty() {
        let _ = write!(details, "<div class=\"desc\">{}</div>", esc(&p.description));
    }
    if !p.price_range.is_empty() {
        let _ = write!(details, "<div class=\"price\">Typical price: {}</div>", esc(&p.price_range));
    }

    format!(
        "          <tr>\
<td class=\"thumb\"><img src=\"{img}\" alt=\"{name}\" width=\"72\" height=\"72\" loading=\"lazy\"></td>\
<td><a href=\"{link}\" rel=\"nofollow sponsored\">{name}</a>{details}</td>\
<td class=\"asin\">{id}</td>\
<td class=\"buy\"><a class=\"btn\" href=\"{link}\" rel=\"nofollow sponsored\">Check price</a></td>\
</tr>",
        id = esc(&p.id),
    )
}

const STYLE: &str = r#"  <style>
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; margin: 0; background:#fafafa; color:#111; }
    header { max-width: 980px; margin: 0 auto; padding: 28px 16px 8px; }
    h1 { font-size: 28px; margin: 0 0 8px; }
    p { margin: 0 0 10px; line-height: 1.4; }
    .meta { color:#444; font-size: 14px; }
    main { max-width: 980px; margin: 0 auto; padding: 8px 16px 32px; }
    .card { background:white; border-radius: 12px; overflow:hidden; box-shadow: 0 2px 10px rgba(0,0,0,0.06); padding: 14px; margin-bottom: 14px; }
    table { width: 100%; border-collapse: collapse; }
    th, td { padding: 12px 10px; border-bottom: 1px solid #eee; vertical-align: middle; }
    th { text-align: left; font-size: 13px; color:#444; background:#f5f5f5; }
    td.thumb { width: 80px; }
    td.thumb img { border-radius: 8px; object-fit: contain; background:#fff; }
    td.asin { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 13px; color:#555; }
    td.buy { width: 160px; text-align: right; white-space:nowrap; }
    .desc { font-size: 14px; color:#444; margin-top: 4px; }
    .price { font-size: 13px; color:#555; margin-top: 2px; }
    a { color:#0b57d0; text-decoration: none; }
    a:hover { text-decoration: underline; }
    .btn { display:inline-block; padding: 9px 12px; border:1px solid #ddd; border-radius: 10px; background:#fff; font-weight: 600; }
    .btn:hover { background:#f7f7f7; text-decoration:none; }
    .note { font-size: 14px; color:#444; }
    footer { max-width: 980px; margin: 0 auto; padding: 18px 16px 40px; color:#555; font-size: 13px; }
    footer a { color:#444; }
  </style>
"#;

const FOOTER: &str = r#"  <footer>
    <p><strong>Affiliate disclosure:</strong> As an Amazon Associate, I earn from qualifying purchases.</p>
    <p><a href="privacy.html">Privacy</a> · <a href="disclosure.html">Disclosure</a></p>
  </footer>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> ListedProduct {
        let mut product = ProductRecord::from_id(id);
        product.name = s!(name);
        ListedProduct { link: format!("https://www.amazon.com/dp/{id}?a=1&tag=t-20"), product }
    }

    #[test]
    fn escapes_everything_interpolated() {
        let row = render_row(&entry("B001", r#"<Pro> "DJ" & 'Co'"#));
        assert!(row.contains("&lt;Pro&gt; &quot;DJ&quot; &amp; "));
        assert!(!row.contains("'Co'"));
        assert!(row.contains("?a=1&amp;tag=t-20"));
        assert!(!row.contains("<Pro>"));
    }

    #[test]
    fn placeholder_image_when_missing() {
        let row = render_row(&entry("B001", "x"));
        assert!(row.contains("data:image/svg+xml"));

        let mut with_img = entry("B002", "y");
        with_img.product.image_url = s!("https://m.media-amazon.com/images/I/abc.jpg");
        assert!(render_row(&with_img).contains("https://m.media-amazon.com/images/I/abc.jpg"));
    }

    #[test]
    fn optional_details_hidden_when_empty() {
        let mut e = entry("B001", "x");
        assert!(!render_row(&e).contains("class=\"desc\""));
        e.product.description = s!("Closed-back");
        e.product.price_range = s!("$50-$70");
        let row = render_row(&e);
        assert!(row.contains("<div class=\"desc\">Closed-back</div>"));
        assert!(row.contains("Typical price: $50-$70"));
    }

    #[test]
    fn empty_list_points_at_input() {
        let rows = render_rows(&[], "asin_list.json");
        assert!(rows.contains("No ASINs found. Add them to asin_list.json."));
    }

    #[test]
    fn page_without_search_card() {
        let meta = PageMeta::default();
        let entries = [entry("B001", "x")];
        let page = render_page(&PageInput {
            meta: &meta,
            entries: &entries,
            search: None,
            updated: "2026-10-15 08:00 UTC",
            input_name: "asin_list.json",
        });
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("Daily build: 2026-10-15 08:00 UTC"));
        assert!(!page.contains("Live prices require"));
        assert!(page.contains("Affiliate disclosure"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
