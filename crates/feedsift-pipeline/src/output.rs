//! RSS 2.0 output rendering and file write.

use std::path::Path;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::PipelineError;
use crate::types::{FeedMeta, RawEntry};

/// Serialize the channel metadata and entries as an RSS 2.0 document.
///
/// An empty entry list still produces a well-formed document with full
/// channel metadata.
pub(crate) fn render_feed(
    meta: &FeedMeta,
    entries: &[RawEntry],
    build_time: DateTime<Utc>,
) -> Result<Vec<u8>, PipelineError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss_start = BytesStart::new("rss");
    rss_start.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss_start))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &meta.title)?;
    write_text_element(&mut writer, "link", &meta.link)?;
    write_text_element(&mut writer, "description", &meta.description)?;
    write_text_element(&mut writer, "language", &meta.language)?;
    write_text_element(&mut writer, "lastBuildDate", &build_time.to_rfc2822())?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        write_text_element(&mut writer, "title", &entry.title)?;
        write_text_element(&mut writer, "link", &entry.link)?;
        if !entry.summary.is_empty() {
            write_text_element(&mut writer, "description", &entry.summary)?;
        }
        if let Some(published) = entry.published {
            write_text_element(&mut writer, "pubDate", &published.to_rfc2822())?;
        }
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    Ok(writer.into_inner())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), PipelineError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render and write the output document, creating parent directories and
/// overwriting any previous run's file.
pub(crate) fn write_feed(
    path: &Path,
    meta: &FeedMeta,
    entries: &[RawEntry],
    build_time: DateTime<Utc>,
) -> Result<(), PipelineError> {
    let body = render_feed(meta, entries, build_time)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, body)?;
    Ok(())
}
