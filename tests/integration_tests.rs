//! Integration tests for tokio_mediatype

use futures::future::BoxFuture;
use std::path::{Path, PathBuf};
use tokio_mediatype::*;

/// A probe that always answers with the same string.
struct Fixed(Option<&'static str>);

impl Probe for Fixed {
    fn probe<'a>(&'a self, _path: &'a Path) -> BoxFuture<'a, Result<Option<String>>> {
        Box::pin(async move { Ok(self.0.map(str::to_string)) })
    }
}

async fn temp_file(ext: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mediatype-{}.{}", uuid::Uuid::new_v4(), ext));
    tokio::fs::write(&path, contents).await.unwrap();
    path
}

#[test]
fn test_parse_classify_and_render() {
    let mt = MediaType::from_mime("text/plain; charset=iso-2022-jp; format=flowed; delsp=yes").unwrap();
    assert_eq!(mt.type_(), "text");
    assert_eq!(mt.sub_type(), "plain");
    assert_eq!(mt.parameter("charset").unwrap().value(), Some("iso-2022-jp"));
    assert!(!mt.is_experimental());
    assert!(!mt.is_vendor());
    assert!(!mt.is_unregistered());
    assert_eq!(
        mt.to_string(),
        "text/plain; charset=iso-2022-jp; format=flowed; delsp=yes"
    );
}

#[test]
fn test_error_kinds() {
    assert!(matches!(MediaType::from_mime(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(MediaType::from_mime("text//"), Err(Error::InvalidMediaType(_))));
    assert!(matches!(
        MediaType::new("text", "plain", [("a", "1"), ("a", "2")]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        MediaType::from_mime("text/plain; a=1; a=2"),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        MediaType::from_mime("application/x.sample+txt"),
        Err(Error::InvalidMediaType(_))
    ));
    assert!(matches!(
        MediaType::simple("sound", "wav"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_static_validators() {
    assert!(is_valid_type("text"));
    assert!(!is_valid_type("sound"));
    assert!(is_valid_sub_type("vnd.ms-excel"));
    assert!(!is_valid_sub_type("error/"));
    assert!(is_valid_suffix("cbor"));
    assert!(!is_valid_suffix("yaml"));
    assert!(is_valid_tree("prs"));
    assert!(!is_valid_tree("vendor"));
}

#[test]
fn test_unregistered_forms() {
    assert!(MediaType::from_mime("application/x.sample+xml").unwrap().is_unregistered());
    assert!(!MediaType::from_mime("application/x-sample+xml").unwrap().is_unregistered());
    assert!(!MediaType::from_mime("application/x-www-form-urlencoded")
        .unwrap()
        .is_unregistered());
}

#[test]
fn test_extension_lookup_then_parse() {
    let mut table = ExtensionTable::builtin();
    table.add_mapping("ics", "text/calendar; charset=utf-8");

    let mt = table.media_type("meeting.ICS").unwrap();
    assert_eq!(mt.essence(), "text/calendar");
    assert_eq!(mt.parameter("charset").unwrap().value(), Some("utf-8"));
}

#[tokio::test]
async fn test_from_file_missing_path() {
    let path = std::env::temp_dir().join(format!("mediatype-missing-{}", uuid::Uuid::new_v4()));
    let result = MediaType::from_file_with(&path, &Fixed(Some("text/plain"))).await;
    assert!(matches!(result, Err(Error::InvalidMediaType(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn test_from_file_existence_check_error() {
    let file = temp_file("txt", "hello").await;

    // A regular file used as a directory: the check fails with ENOTDIR, not "not found".
    let result = MediaType::from_file_with(file.join("child"), &Fixed(Some("text/plain"))).await;
    assert!(matches!(result, Err(Error::Io(_))), "{:?}", result);

    tokio::fs::remove_file(&file).await.unwrap();
}

#[tokio::test]
async fn test_from_file_with_probe() {
    let path = temp_file("txt", "hello").await;

    let mt = MediaType::from_file_with(&path, &Fixed(Some("text/plain; charset=us-ascii")))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mt.essence(), "text/plain");
    assert_eq!(mt.parameter("charset").unwrap().value(), Some("us-ascii"));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_from_file_undetermined() {
    let path = temp_file("bin", "hello").await;

    let found = MediaType::from_file_with(&path, &Fixed(None)).await.unwrap();
    assert!(found.is_none());

    let found = MediaType::from_file_with(&path, &Fixed(Some(""))).await.unwrap();
    assert!(found.is_none());

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_from_file_invalid_probe_result() {
    let path = temp_file("dir", "hello").await;

    let result = MediaType::from_file_with(&path, &Fixed(Some("inode/directory"))).await;
    assert!(matches!(result, Err(Error::InvalidMediaType(_))));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_from_file_chain_falls_back_to_extension() {
    let path = temp_file("svg", "<svg/>").await;

    let chain = ProbeChain::new()
        .with(Fixed(None))
        .with(ExtensionTable::builtin());
    let mt = MediaType::from_file_with(&path, &chain).await.unwrap().unwrap();
    assert_eq!(mt.essence(), "image/svg+xml");
    assert_eq!(mt.suffix(), Some("xml"));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_from_file_host_probe() {
    let path = temp_file("txt", "plain text for the host probe\n").await;

    // Hosts without file(1) cannot determine a type; that is not an error.
    if let Some(mt) = MediaType::from_file(&path).await.unwrap() {
        assert_eq!(mt.type_(), "text");
        assert_eq!(mt.sub_type(), "plain");
    }

    tokio::fs::remove_file(&path).await.unwrap();
}
