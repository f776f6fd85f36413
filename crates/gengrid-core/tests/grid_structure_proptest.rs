#![allow(clippy::unwrap_used, clippy::expect_used)]

use gengrid_core::{CellTextMode, GridSpec, GridXmlEmitter};
use proptest::prelude::*;

fn check_structure(out: &str, width: u32, height: u32, label: &str) {
    let doc = roxmltree::Document::parse(out).unwrap();
    let grid = doc.root_element();

    assert_eq!(grid.tag_name().name(), "grid");
    assert_eq!(grid.attribute("type"), Some("rectangular"));
    assert_eq!(grid.attribute("width"), Some(width.to_string().as_str()));
    assert_eq!(grid.attribute("height"), Some(height.to_string().as_str()));
    assert_eq!(grid.attribute("neighbors"), Some("8"));
    assert_eq!(grid.attribute("wrapping"), Some("false"));

    let rows: Vec<_> = grid.children().filter(|n| n.is_element()).collect();
    assert_eq!(rows.len(), height as usize);
    for row in rows {
        assert_eq!(row.tag_name().name(), "gridrow");
        let cells: Vec<_> = row.children().filter(|n| n.is_element()).collect();
        assert_eq!(cells.len(), width as usize);
        for cell in cells {
            assert_eq!(cell.tag_name().name(), "gridcell");
            assert_eq!(cell.text(), Some(label));
        }
    }
}

proptest! {
    #[test]
    fn prop_counts_and_attributes(
        width in 0u32..24,
        height in 0u32..24,
        label in "[A-Za-z][A-Za-z0-9_]{0,11}",
    ) {
        let out = GridXmlEmitter::default()
            .render_to_string(&GridSpec::new(width, height, label.clone()))
            .unwrap();
        check_structure(&out, width, height, &label);
    }

    #[test]
    fn prop_escaped_output_is_always_well_formed(
        width in 1u32..6,
        height in 1u32..6,
        label in "[a-z<>&]{1,10}",
    ) {
        let out = GridXmlEmitter::new(CellTextMode::Escaped)
            .render_to_string(&GridSpec::new(width, height, label.clone()))
            .unwrap();
        check_structure(&out, width, height, &label);
    }
}
