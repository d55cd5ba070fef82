//! Map document annotation.
//!
//! The service delivers an SVG payload whose shapes carry `thenmap:name`
//! and `thenmap:class` attributes. Annotation rewrites the document so it
//! is ready for styling and interaction:
//!
//! - every `path` gets a `<title>` child from its `thenmap:name` attribute
//!   and its `class` attribute set from `thenmap:class`
//! - the hover filter is inserted into the document's `<defs>` section
//!
//! Colorization selectors target the classes assigned here, so annotation
//! must complete before any colorization pass runs.

use crate::error::{MapError, MapResult};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Id of the filter referenced by the hover rule in the base styles.
pub const HOVER_FILTER_ID: &str = "sepia";

/// Color matrix of the hover filter.
const HOVER_FILTER_MATRIX: &str = "0.35 0.35 0.35 0 0 \
0.25 0.25 0.25 0 0 \
0.15 0.15 0.15 0 0 \
0.50 0.50 0.50 1 0";

/// A fully annotated map document.
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    /// The rewritten SVG text, ready to attach under the container.
    pub svg: String,
    /// One record per drawable shape, in document order.
    pub regions: Vec<RegionShape>,
}

/// Annotation outcome for a single drawable shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionShape {
    /// Human-readable label, from the service's name attribute.
    pub label: Option<String>,
    /// Presentation class, from the service's class attribute.
    pub class: Option<String>,
}

/// Parses and annotates a map document payload.
///
/// Fails with [`MapError::Document`] when the payload is not well-formed
/// XML or lacks a `<defs>` section to hold the hover filter.
pub fn annotate(svg: &str) -> MapResult<AnnotatedDocument> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::new());
    let mut regions = Vec::new();
    let mut saw_defs = false;

    loop {
        match reader.read_event() {
            Err(e) => return Err(MapError::Document(format!("malformed map payload: {e}"))),
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) if e.name().as_ref() == b"path" => {
                regions.push(annotate_path(&e, &mut writer)?);
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"path" => {
                regions.push(annotate_path(&e, &mut writer)?);
                write(&mut writer, Event::End(BytesEnd::new("path")))?;
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"defs" => {
                saw_defs = true;
                write(&mut writer, Event::Start(e))?;
                write_hover_filter(&mut writer)?;
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"defs" => {
                // expand so the filter has somewhere to live
                saw_defs = true;
                write(&mut writer, Event::Start(e))?;
                write_hover_filter(&mut writer)?;
                write(&mut writer, Event::End(BytesEnd::new("defs")))?;
            }
            Ok(event) => write(&mut writer, event)?,
        }
    }

    if !saw_defs {
        return Err(MapError::Document(
            "map document has no <defs> section".to_string(),
        ));
    }

    let svg = String::from_utf8(writer.into_inner())
        .map_err(|e| MapError::Document(format!("annotated document is not valid UTF-8: {e}")))?;

    Ok(AnnotatedDocument { svg, regions })
}

/// Rewrites one `path` start tag: existing attributes are kept (minus any
/// stale `class`), the class is assigned from `thenmap:class`, and a
/// `<title>` child is emitted from `thenmap:name`.
fn annotate_path<W: std::io::Write>(
    e: &BytesStart<'_>,
    writer: &mut Writer<W>,
) -> MapResult<RegionShape> {
    let label = attr_string(e, b"thenmap:name")?;
    let class = attr_string(e, b"thenmap:class")?;

    let mut path = BytesStart::new("path");
    for attr in e.attributes() {
        let attr = attr.map_err(|err| MapError::Document(format!("malformed attribute: {err}")))?;
        if attr.key.as_ref() == b"class" {
            continue;
        }
        path.push_attribute(attr);
    }
    if let Some(class) = &class {
        path.push_attribute(("class", class.as_str()));
    }
    write(writer, Event::Start(path))?;

    if let Some(label) = &label {
        write(writer, Event::Start(BytesStart::new("title")))?;
        write(writer, Event::Text(BytesText::new(label)))?;
        write(writer, Event::End(BytesEnd::new("title")))?;
    }

    Ok(RegionShape { label, class })
}

fn write_hover_filter<W: std::io::Write>(writer: &mut Writer<W>) -> MapResult<()> {
    let mut filter = BytesStart::new("filter");
    filter.push_attribute(("id", HOVER_FILTER_ID));
    write(writer, Event::Start(filter))?;

    let mut matrix = BytesStart::new("feColorMatrix");
    matrix.push_attribute(("type", "matrix"));
    matrix.push_attribute(("values", HOVER_FILTER_MATRIX));
    write(writer, Event::Empty(matrix))?;

    write(writer, Event::End(BytesEnd::new("filter")))
}

fn attr_string(e: &BytesStart<'_>, name: &[u8]) -> MapResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| MapError::Document(format!("malformed attribute: {err}")))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| MapError::Document(format!("malformed attribute value: {err}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn write<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> MapResult<()> {
    writer
        .write_event(event)
        .map_err(|e| MapError::Document(format!("failed to write document event: {e}")))
}
