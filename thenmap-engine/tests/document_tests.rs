use pretty_assertions::assert_eq;
use thenmap_engine::{MapError, annotate};

const WORLD_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:thenmap="http://www.thenmap.net" width="800"><defs></defs><g><path d="M0 0" thenmap:name="Sweden" thenmap:class="se"/><path d="M1 1" thenmap:name="Norway" thenmap:class="no"></path></g></svg>"#;

#[test]
fn assigns_classes_from_service_attributes() {
    let doc = annotate(WORLD_SVG).unwrap();
    assert!(doc.svg.contains(r#"class="se""#));
    assert!(doc.svg.contains(r#"class="no""#));
}

#[test]
fn attaches_title_labels() {
    let doc = annotate(WORLD_SVG).unwrap();
    assert!(doc.svg.contains("<title>Sweden</title>"));
    assert!(doc.svg.contains("<title>Norway</title>"));
}

#[test]
fn inserts_hover_filter_into_defs() {
    let doc = annotate(WORLD_SVG).unwrap();
    assert!(doc.svg.contains(r#"<filter id="sepia">"#));
    assert!(doc.svg.contains("feColorMatrix"));
    assert!(doc.svg.contains(r#"type="matrix""#));
}

#[test]
fn reports_regions_in_document_order() {
    let doc = annotate(WORLD_SVG).unwrap();
    assert_eq!(doc.regions.len(), 2);
    assert_eq!(doc.regions[0].label.as_deref(), Some("Sweden"));
    assert_eq!(doc.regions[0].class.as_deref(), Some("se"));
    assert_eq!(doc.regions[1].label.as_deref(), Some("Norway"));
    assert_eq!(doc.regions[1].class.as_deref(), Some("no"));
}

#[test]
fn self_closed_paths_get_title_children() {
    // the first path in the fixture is self-closed; its title must end up
    // inside an expanded element
    let doc = annotate(WORLD_SVG).unwrap();
    let sweden = doc.svg.find("<title>Sweden</title>").unwrap();
    let closing = doc.svg[sweden..].find("</path>");
    assert!(closing.is_some());
}

#[test]
fn keeps_unrelated_attributes_and_elements() {
    let doc = annotate(WORLD_SVG).unwrap();
    assert!(doc.svg.contains(r#"width="800""#));
    assert!(doc.svg.contains(r#"d="M0 0""#));
    assert!(doc.svg.contains("<g>"));
}

#[test]
fn replaces_preexisting_class() {
    let svg = r#"<svg><defs></defs><path class="old" thenmap:class="se"/></svg>"#;
    let doc = annotate(svg).unwrap();
    assert!(doc.svg.contains(r#"class="se""#));
    assert!(!doc.svg.contains("old"));
}

#[test]
fn path_without_service_attributes_is_left_bare() {
    let svg = r#"<svg><defs></defs><path d="M0 0"/></svg>"#;
    let doc = annotate(svg).unwrap();
    assert_eq!(doc.regions.len(), 1);
    assert_eq!(doc.regions[0].label, None);
    assert_eq!(doc.regions[0].class, None);
    assert!(!doc.svg.contains("<title>"));
    assert!(!doc.svg.contains("class="));
}

#[test]
fn self_closed_defs_still_receives_filter() {
    let svg = r#"<svg><defs/><path thenmap:class="se"/></svg>"#;
    let doc = annotate(svg).unwrap();
    assert!(doc.svg.contains(r#"<filter id="sepia">"#));
    assert!(doc.svg.contains("</defs>"));
}

#[test]
fn missing_defs_is_a_document_error() {
    let svg = r#"<svg><path thenmap:class="se"/></svg>"#;
    let err = annotate(svg).unwrap_err();
    assert!(matches!(err, MapError::Document(_)));
}

#[test]
fn malformed_payload_is_a_document_error() {
    let err = annotate("<svg><defs></svg>").unwrap_err();
    assert!(matches!(err, MapError::Document(_)));
}

#[test]
fn escaped_labels_survive_the_roundtrip() {
    let svg = r#"<svg><defs></defs><path thenmap:name="Trinidad &amp; Tobago" thenmap:class="tt"/></svg>"#;
    let doc = annotate(svg).unwrap();
    assert_eq!(doc.regions[0].label.as_deref(), Some("Trinidad & Tobago"));
    assert!(doc.svg.contains("Trinidad &amp; Tobago"));
}
