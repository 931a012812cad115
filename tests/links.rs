// tests/links.rs
//
// Affiliate link building: id mode, full-URL mode, search URL.
//
use amz_shortlist::config::{Marketplace, SearchOptions, TrackingTag};
use amz_shortlist::link::{LinkMode, build_link, dp_url, link_for, search_url, tag_url};
use amz_shortlist::normalize::ProductRecord;
use url::Url;

fn tag(s: &str) -> TrackingTag {
    TrackingTag::new(s).unwrap()
}

fn amazon() -> Marketplace {
    Marketplace::default()
}

#[test]
fn id_mode_is_exact() {
    let link = build_link("B002", &tag("mytag-20"), LinkMode::Id, &amazon()).unwrap();
    assert_eq!(link, "https://www.amazon.com/dp/B002?tag=mytag-20");
}

#[test]
fn full_url_keeps_existing_params() {
    let link = build_link(
        "https://www.amazon.com/dp/B001?ref=xyz",
        &tag("mytag-20"),
        LinkMode::FullUrl,
        &amazon(),
    )
    .unwrap();
    assert_eq!(link, "https://www.amazon.com/dp/B001?ref=xyz&tag=mytag-20");

    let parsed = Url::parse(&link).unwrap();
    assert_eq!(parsed.path(), "/dp/B001");
    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("ref".into(), "xyz".into())));
    assert!(pairs.contains(&("tag".into(), "mytag-20".into())));
}

#[test]
fn full_url_without_query_gets_only_tag() {
    let link = tag_url("https://www.amazon.com/dp/B003", &tag("mytag-20")).unwrap();
    assert_eq!(Url::parse(&link).unwrap().query(), Some("tag=mytag-20"));
}

#[test]
fn existing_tag_is_overwritten() {
    let link = tag_url("https://www.amazon.com/dp/B001?tag=someone-else-20&th=1", &tag("mytag-20")).unwrap();
    assert_eq!(link, "https://www.amazon.com/dp/B001?tag=mytag-20&th=1");
}

#[test]
fn blank_values_and_duplicates_survive() {
    let link = tag_url(
        "https://www.amazon.com/dp/B001?psc&ref=&color=red&color=blue#reviews",
        &tag("mytag-20"),
    )
    .unwrap();
    assert_eq!(
        link,
        "https://www.amazon.com/dp/B001?psc&ref=&color=red&color=blue&tag=mytag-20#reviews"
    );
}

#[test]
fn full_url_mode_is_idempotent() {
    let t = tag("mytag-20");
    for src in [
        "https://www.amazon.com/dp/B001",
        "https://www.amazon.com/dp/B001?ref=xyz",
        "https://www.amazon.com/gp/product/B001?tag=old&keywords=dj+headphones&x#top",
        "https://smile.amazon.com/dp/B001?a=%20b&tag=mytag-20",
    ] {
        let once = tag_url(src, &t).unwrap();
        let twice = tag_url(&once, &t).unwrap();
        assert_eq!(once, twice, "not idempotent for {src}");
    }
}

#[test]
fn encoded_params_are_kept_verbatim() {
    let link = tag_url("https://www.amazon.com/s?k=dj%20headphones&rh=p_36%3A-10000", &tag("a b")).unwrap();
    assert_eq!(link, "https://www.amazon.com/s?k=dj%20headphones&rh=p_36%3A-10000&tag=a+b");
}

#[test]
fn product_link_prefers_source_url() {
    let t = tag("mytag-20");
    let mut p = ProductRecord::from_id("B001");
    assert_eq!(link_for(&p, &t, &amazon()), dp_url("B001", &t, &amazon()));

    p.source_url = "https://www.amazon.com/dp/B001?th=1".into();
    assert_eq!(link_for(&p, &t, &amazon()), "https://www.amazon.com/dp/B001?th=1&tag=mytag-20");
}

#[test]
fn unusable_source_url_falls_back_to_id() {
    let t = tag("mytag-20");
    let mut p = ProductRecord::from_id("B004");
    p.source_url = "not a url".into();
    assert_eq!(link_for(&p, &t, &amazon()), "https://www.amazon.com/dp/B004?tag=mytag-20");
}

#[test]
fn url_outside_the_query_is_left_as_written() {
    let t = tag("mytag-20");
    assert_eq!(
        tag_url("HTTPS://WWW.Amazon.com:443/dp/B001?ref=xyz", &t).unwrap(),
        "HTTPS://WWW.Amazon.com:443/dp/B001?ref=xyz&tag=mytag-20"
    );
    assert_eq!(
        tag_url("https://www.amazon.com/gp/../dp/B001?ref=xyz", &t).unwrap(),
        "https://www.amazon.com/gp/../dp/B001?ref=xyz&tag=mytag-20"
    );
    assert_eq!(
        tag_url("https://www.amazon.com/s?q=dj headphones&n='x'#a b", &t).unwrap(),
        "https://www.amazon.com/s?q=dj headphones&n='x'&tag=mytag-20#a b"
    );
}

#[test]
fn non_web_source_url_falls_back_to_id() {
    let t = tag("mytag-20");
    for src in ["javascript:alert(1)", "mailto:x@y.z", "data:text/html,hi"] {
        let mut p = ProductRecord::from_id("B005");
        p.source_url = src.into();
        assert_eq!(link_for(&p, &t, &amazon()), "https://www.amazon.com/dp/B005?tag=mytag-20", "{src}");
    }
}

#[test]
fn search_url_matches_marketplace_format() {
    let url = search_url(&SearchOptions::default(), &tag("mytag-20"), &amazon());
    assert_eq!(
        url,
        "https://www.amazon.com/s?k=dj+headphones&rh=p_36%3A-10000&s=price-asc-rank&tag=mytag-20"
    );

    let uk = Marketplace::new("www.amazon.co.uk");
    let search = SearchOptions { keywords: "mixer & decks".into(), max_price_cents: 4999, ..SearchOptions::default() };
    assert_eq!(
        search_url(&search, &tag("uk-21"), &uk),
        "https://www.amazon.co.uk/s?k=mixer+%26+decks&rh=p_36%3A-4999&s=price-asc-rank&tag=uk-21"
    );
}
