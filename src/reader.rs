use crate::error::{GpxError, Result};
use crate::waypoint::Waypoint;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

const GPX_TAG: &str = "gpx";
const WPT_TAG: &str = "wpt";
const GPX_NAMESPACES: [&str; 2] = [
    "http://www.topografix.com/GPX/1/0",
    "http://www.topografix.com/GPX/1/1",
];

pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    Ok(Document::parse_with_options(text, options)?)
}

/// Collects the `<wpt>` children of the `<gpx>` root, in document order.
///
/// Entries without both `lat` and `lon` are dropped. Missing `name`, `ele`,
/// `time` or `cmt` children read as empty text.
pub fn read_waypoints<'a>(doc: &'a Document<'_>) -> Result<Vec<Waypoint<'a>>> {
    let gpx = doc
        .root()
        .children()
        .find(|n| is_element(n, GPX_TAG))
        .ok_or(GpxError::MissingRoot)?;

    let mut waypoints = Vec::new();

    for wpt in gpx.children().filter(|n| is_element(n, WPT_TAG)) {
        let (Some(lat), Some(lon)) = (wpt.attribute("lat"), wpt.attribute("lon")) else {
            debug!(
                "Skipping <wpt> without lat/lon at {}",
                doc.text_pos_at(wpt.range().start)
            );
            continue;
        };

        waypoints.push(Waypoint::new(
            lat,
            lon,
            child_text(wpt, "name"),
            child_text(wpt, "ele"),
            child_text(wpt, "time"),
            child_text(wpt, "cmt"),
        ));
    }

    Ok(waypoints)
}

// Unqualified or in a GPX namespace; extension elements never match.
fn is_element(node: &Node, name: &str) -> bool {
    let tag = node.tag_name();
    node.is_element()
        && tag.name() == name
        && tag.namespace().map_or(true, |ns| GPX_NAMESPACES.contains(&ns))
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.children()
        .find(|n| is_element(n, name))
        .and_then(|n| n.text())
        .map(str::trim)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn waypoints_of(text: &str) -> Vec<(String, String, String)> {
        let doc = parse_document(text).unwrap();
        read_waypoints(&doc)
            .unwrap()
            .iter()
            .map(|w| (w.lat().to_string(), w.lon().to_string(), w.name().to_string()))
            .collect()
    }

    #[test]
    fn reads_waypoints_in_document_order() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
            <gpx version="1.1" xmlns="http://www.topografix.com/GPX/1/1">
              <wpt lat="10" lon="20"><name>A</name></wpt>
              <wpt lat="11" lon="21"><name>B</name></wpt>
              <wpt lat="12" lon="22"><name>C</name></wpt>
            </gpx>"#;

        assert_eq!(
            waypoints_of(text),
            vec![
                ("10".into(), "20".into(), "A".into()),
                ("11".into(), "21".into(), "B".into()),
                ("12".into(), "22".into(), "C".into()),
            ]
        );
    }

    #[test]
    fn reads_every_field() {
        let text = r#"<gpx>
              <wpt lat="35.6586" lon="139.7454">
                <ele>333</ele>
                <time>2021-05-01T10:00:00Z</time>
                <name>Tower</name>
                <cmt>observation deck</cmt>
              </wpt>
            </gpx>"#;
        let doc = parse_document(text).unwrap();
        let waypoints = read_waypoints(&doc).unwrap();

        assert_eq!(
            waypoints,
            vec![Waypoint::new(
                "35.6586",
                "139.7454",
                "Tower",
                "333",
                "2021-05-01T10:00:00Z",
                "observation deck"
            )]
        );
    }

    #[rstest]
    #[case::no_lat(r#"<wpt lon="20"><name>X</name></wpt>"#)]
    #[case::no_lon(r#"<wpt lat="10"><name>X</name></wpt>"#)]
    #[case::neither(r#"<wpt><name>X</name><ele>5</ele></wpt>"#)]
    fn skips_waypoints_without_coordinates(#[case] wpt: &str) {
        let text = format!(
            r#"<gpx><wpt lat="1" lon="2"><name>A</name></wpt>{wpt}<wpt lat="3" lon="4"><name>B</name></wpt></gpx>"#
        );

        assert_eq!(
            waypoints_of(&text),
            vec![
                ("1".into(), "2".into(), "A".into()),
                ("3".into(), "4".into(), "B".into()),
            ]
        );
    }

    #[test]
    fn missing_children_read_as_empty() {
        let doc = parse_document(r#"<gpx><wpt lat="1" lon="2"/></gpx>"#).unwrap();
        let waypoints = read_waypoints(&doc).unwrap();

        assert_eq!(waypoints, vec![Waypoint::new("1", "2", "", "", "", "")]);
    }

    #[test]
    fn empty_child_reads_as_empty() {
        let doc = parse_document(r#"<gpx><wpt lat="1" lon="2"><ele/><cmt></cmt></wpt></gpx>"#)
            .unwrap();
        let waypoints = read_waypoints(&doc).unwrap();

        assert_eq!(waypoints[0].ele(), "");
        assert_eq!(waypoints[0].cmt(), "");
    }

    #[test]
    fn trims_surrounding_whitespace_in_text() {
        let doc = parse_document(
            "<gpx><wpt lat=\"1\" lon=\"2\"><name>\n    Summit  \n</name></wpt></gpx>",
        )
        .unwrap();

        assert_eq!(read_waypoints(&doc).unwrap()[0].name(), "Summit");
    }

    #[test]
    fn ignores_non_waypoint_children() {
        let text = r#"<gpx>
              <metadata><name>Trip</name></metadata>
              <trk><name>Track</name><trkseg><trkpt lat="5" lon="6"/></trkseg></trk>
              <rte><rtept lat="7" lon="8"/></rte>
              <wpt lat="1" lon="2"><name>Only</name></wpt>
            </gpx>"#;

        assert_eq!(waypoints_of(text), vec![("1".into(), "2".into(), "Only".into())]);
    }

    #[test]
    fn nested_waypoints_are_not_direct_children() {
        let text = r#"<gpx><extensions><wpt lat="1" lon="2"/></extensions></gpx>"#;

        assert!(waypoints_of(text).is_empty());
    }

    #[test]
    fn foreign_namespace_elements_are_ignored() {
        let text = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1" xmlns:x="urn:example:ext">
              <x:wpt lat="9" lon="9"><name>Foreign</name></x:wpt>
              <wpt lat="1" lon="2"><x:name>Shadow</x:name><name>Real</name></wpt>
            </gpx>"#;

        assert_eq!(waypoints_of(text), vec![("1".into(), "2".into(), "Real".into())]);
    }

    #[test]
    fn foreign_namespace_root_is_missing() {
        let doc = parse_document(r#"<x:gpx xmlns:x="urn:example:ext"/>"#).unwrap();

        assert!(matches!(read_waypoints(&doc), Err(GpxError::MissingRoot)));
    }

    #[test]
    fn gpx_1_0_namespace_is_accepted() {
        let text = r#"<gpx xmlns="http://www.topografix.com/GPX/1/0"><wpt lat="1" lon="2"/></gpx>"#;

        assert_eq!(waypoints_of(text), vec![("1".into(), "2".into(), "".into())]);
    }

    #[test]
    fn missing_gpx_root_is_an_error() {
        let doc = parse_document("<foo/>").unwrap();

        assert!(matches!(read_waypoints(&doc), Err(GpxError::MissingRoot)));
    }

    #[test]
    fn malformed_xml_reports_a_position() {
        let error = parse_document("<gpx><wpt lat=\"1\" lon=\"2\"></gpx>").unwrap_err();

        assert!(matches!(error, GpxError::Xml(_)));
        assert!(error.to_string().contains("1:"), "no position in: {error}");
    }
}
