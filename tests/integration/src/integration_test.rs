//! End-to-end tests across backends
//!
//! Pages are fetched through the services, then read with path expressions:
//! fetch -> compose (custom objects) -> navigate -> locale -> convert.

use std::time::Duration;

use async_trait::async_trait;
use cms_api::{CmsConfig, CmsPage, CmsService, Error, Locale, Result, fetch_page};
use cms_custom_objects::{CustomObjectCmsService, InMemoryCustomObjectStore};
use cms_entries::{Entry, EntryCmsService, EntryPage, InMemoryEntryFetcher};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

const TYPED_PAGE: &str = include_str!("../../../test-fixtures/pages/typed-page.json");
const CUSTOM_OBJECT_PAGE: &str = include_str!("../../../test-fixtures/pages/custom-object-page.json");

fn locales(tags: &[&str]) -> Vec<Locale> {
    tags.iter().map(|t| t.parse().unwrap()).collect()
}

fn entry_service() -> EntryCmsService<InMemoryEntryFetcher> {
    let entry = Entry::from_json_str(TYPED_PAGE).unwrap();
    let config = CmsConfig::default();
    EntryCmsService::from_config(InMemoryEntryFetcher::new(vec![entry]), &config.entries)
}

fn custom_object_service() -> CustomObjectCmsService<InMemoryCustomObjectStore> {
    let object: Value = serde_json::from_str(CUSTOM_OBJECT_PAGE).unwrap();
    let config = CmsConfig::default();
    CustomObjectCmsService::from_config(
        InMemoryCustomObjectStore::new(vec![object]),
        &config.custom_objects,
    )
}

async fn typed_page(tags: &[&str]) -> EntryPage {
    entry_service()
        .page("home", &locales(tags))
        .await
        .unwrap()
        .expect("typed page exists")
}

#[rstest]
#[case("array[1].name", "author1")]
#[case("array[0].portraits[0]", "//images.example.com/author0.png")]
#[case("array[1].portraits[1]", "//images.example.com/author1-large.png")]
#[case("title", "Welcome")]
#[case("published", "true")]
#[case("publishedAt", "2017-03-01")]
#[case("rating", "4.5")]
#[case("venue", "{lon=19.62, lat=51.37}")]
#[case("logo", "//images.example.com/logo.png")]
#[case("keywords[3]", "culture")]
#[tokio::test]
async fn test_typed_page_fields(#[case] path: &str, #[case] expected: &str) {
    let page = typed_page(&["en"]).await;
    assert_eq!(page.field(path).as_deref(), Some(expected));
}

#[rstest]
#[case("placeholder")]
#[case("keywords[4]")]
#[case("keywords")]
#[case("title[0]")]
#[case("array[2].name")]
#[case("array[1]..name")]
#[case("array")]
#[tokio::test]
async fn test_typed_page_misses(#[case] path: &str) {
    let page = typed_page(&["en"]).await;
    assert_eq!(page.field(path), None);
    assert_eq!(page.field_or_default(path), "");
}

#[tokio::test]
async fn test_typed_page_locale_preferences() {
    let german = typed_page(&["de", "en"]).await;
    assert_eq!(german.field("title").as_deref(), Some("Willkommen"));
    assert_eq!(german.field("array[1].name").as_deref(), Some("Autor 1"));
    assert_eq!(german.field("array[0].name").as_deref(), Some("author0"));

    let french = typed_page(&["fr"]).await;
    assert_eq!(french.field("title"), None);

    let unspecified = typed_page(&[]).await;
    assert_eq!(unspecified.field("title").as_deref(), Some("Welcome"));
}

#[tokio::test]
async fn test_unknown_typed_page() {
    assert!(entry_service().page("nowhere", &[]).await.unwrap().is_none());
}

#[rstest]
#[case("pageContent.description", Some("Hello"))]
#[case("pageContent.headline", Some("Welcome"))]
#[case("navigation[2]", Some("contact"))]
#[case("footer.copyright", Some("(c) 2018"))]
#[case("footer.visible", Some("true"))]
#[case("navigation[3]", None)]
#[case("pageContent", None)]
#[tokio::test]
async fn test_custom_object_page_fields(#[case] path: &str, #[case] expected: Option<&str>) {
    let page = custom_object_service()
        .page("home", &locales(&["de"]))
        .await
        .unwrap()
        .expect("custom object page exists");
    assert_eq!(page.field(path).as_deref(), expected);
}

#[tokio::test]
async fn test_pages_behind_trait_objects() {
    let typed: Box<dyn CmsPage> = Box::new(typed_page(&["en"]).await);
    let composed: Box<dyn CmsPage> = Box::new(
        custom_object_service()
            .page("home", &[])
            .await
            .unwrap()
            .unwrap(),
    );

    assert_eq!(typed.field_or_default("array[1].name"), "author1");
    assert_eq!(composed.field_or_default("pageContent.description"), "Hello");
}

struct SlowService;

#[async_trait]
impl CmsService for SlowService {
    type Page = EntryPage;

    async fn page(&self, _page_key: &str, _locales: &[Locale]) -> Result<Option<EntryPage>> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(None)
    }
}

#[tokio::test]
async fn test_fetch_page_with_timeout() {
    let config = CmsConfig::parse("[cms]\nfetch_timeout_ms = 20\n").unwrap();

    let err = fetch_page(&SlowService, "home", &[], config.fetch_timeout())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { millis: 20, .. }));

    let page = fetch_page(&entry_service(), "home", &locales(&["en"]), config.fetch_timeout())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.field("slug").as_deref(), Some("home"));
}
