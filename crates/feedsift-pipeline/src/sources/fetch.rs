//! Single-source fetch and parse.

use feed_rs::model::Entry;
use reqwest::Client;

use crate::error::PipelineError;
use crate::types::RawEntry;

/// Fetch one source feed and parse it into entries in document order.
///
/// # Errors
///
/// Returns [`PipelineError::Http`] on network failure or a non-2xx status,
/// and [`PipelineError::Feed`] when the body is not a parseable feed.
pub async fn fetch_feed(client: &Client, url: &str) -> Result<Vec<RawEntry>, PipelineError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    parse_feed(body.as_ref(), url)
}

/// Parse a feed body (RSS 2.0, RSS 1.0/RDF, or Atom) into `RawEntry`s.
pub(crate) fn parse_feed(body: &[u8], source_url: &str) -> Result<Vec<RawEntry>, PipelineError> {
    let feed = feed_rs::parser::parse(body)?;
    Ok(feed
        .entries
        .into_iter()
        .map(|entry| raw_entry(entry, source_url))
        .collect())
}

/// Flatten a feed-rs entry into a [`RawEntry`], defaulting missing fields
/// to empty text rather than failing.
fn raw_entry(entry: Entry, source_url: &str) -> RawEntry {
    let link = select_entry_link(&entry);
    let title = entry.title.map(|t| t.content).unwrap_or_default();
    // Summary first; content body is the alternate description field some
    // feeds use instead.
    let summary = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();
    let categories = entry.categories.into_iter().map(|c| c.term).collect();
    let published = entry.published.or(entry.updated);

    RawEntry {
        title,
        link,
        summary,
        categories,
        published,
        source: source_url.to_string(),
    }
}

/// Pick the entry's canonical link: the first alternate (or rel-less) link,
/// then any non-empty link, then an http(s) id.
fn select_entry_link(entry: &Entry) -> String {
    for link in &entry.links {
        let href = link.href.trim();
        if href.is_empty() {
            continue;
        }
        let rel = link.rel.as_deref().unwrap_or("");
        if rel.is_empty() || rel.eq_ignore_ascii_case("alternate") {
            return href.to_string();
        }
    }
    if let Some(link) = entry.links.iter().find(|l| !l.href.trim().is_empty()) {
        return link.href.clone();
    }
    let id = entry.id.trim();
    if id.starts_with("http://") || id.starts_with("https://") {
        return id.to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS2: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Game News</title>
    <link>https://example.com/</link>
    <description>news</description>
    <item>
      <title>ファミコングッズ特集</title>
      <link>https://example.com/docs/goods/100.html</link>
      <description>レトロゲームグッズのまとめ</description>
      <category>グッズ</category>
      <pubDate>Sat, 01 Aug 2026 09:00:00 +0000</pubDate>
    </item>
    <item>
      <title>新作レビュー</title>
      <link>https://example.com/docs/review/200.html</link>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_RDF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns="http://purl.org/rss/1.0/"
         xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel rdf:about="https://example.jp/">
    <title>Example Watch</title>
    <link>https://example.jp/</link>
    <description>news</description>
    <items>
      <rdf:Seq>
        <rdf:li rdf:resource="https://example.jp/docs/news/1.html"/>
      </rdf:Seq>
    </items>
  </channel>
  <item rdf:about="https://example.jp/docs/news/1.html">
    <title>グッズ特集</title>
    <link>https://example.jp/docs/news/1.html</link>
    <description>概要テキスト</description>
    <dc:date>2026-08-01T09:00:00+09:00</dc:date>
  </item>
</rdf:RDF>"#;

    #[test]
    fn parses_rss2_items_in_document_order() {
        let entries = parse_feed(SAMPLE_RSS2.as_bytes(), "https://example.com/feed.xml")
            .expect("should parse valid RSS 2.0");
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.title, "ファミコングッズ特集");
        assert_eq!(first.link, "https://example.com/docs/goods/100.html");
        assert_eq!(first.summary, "レトロゲームグッズのまとめ");
        assert_eq!(first.categories, vec!["グッズ".to_string()]);
        assert!(first.published.is_some());
        assert_eq!(first.source, "https://example.com/feed.xml");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let entries = parse_feed(SAMPLE_RSS2.as_bytes(), "https://example.com/feed.xml")
            .expect("should parse valid RSS 2.0");
        let second = &entries[1];
        assert_eq!(second.title, "新作レビュー");
        assert_eq!(second.summary, "");
        assert!(second.categories.is_empty());
    }

    #[test]
    fn parses_rdf_feed() {
        let entries = parse_feed(SAMPLE_RDF.as_bytes(), "https://example.jp/feed.rdf")
            .expect("should parse valid RSS 1.0/RDF");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "グッズ特集");
        assert_eq!(entries[0].link, "https://example.jp/docs/news/1.html");
        assert_eq!(entries[0].summary, "概要テキスト");
    }

    #[test]
    fn non_feed_body_is_an_error() {
        let result = parse_feed(b"<html><body>not a feed</body></html>", "https://example.com/");
        assert!(matches!(result, Err(PipelineError::Feed(_))));
    }

    #[test]
    fn empty_channel_yields_no_entries() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title><link>https://example.com/</link><description>d</description></channel></rss>"#;
        let entries = parse_feed(xml.as_bytes(), "https://example.com/feed.xml")
            .expect("should parse empty channel");
        assert!(entries.is_empty());
    }
}
