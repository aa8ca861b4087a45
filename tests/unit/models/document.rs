use super::*;

#[test]
fn new_draft_is_a_blank_5x5_card() {
    let doc = Document::new_draft();

    assert!(doc.id.is_none());
    assert_eq!(doc.title, "");
    assert_eq!(doc.grid_size, 5);
    assert_eq!(doc.cells.len(), 25);
    assert_eq!(doc.status, DocumentStatus::Draft);
    assert!(doc.local_images.is_empty());
}

#[test]
fn fresh_cells_are_position_indexed_and_blank() {
    let cells = fresh_cells(3);
    assert_eq!(cells.len(), 9);
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.position, i);
        assert!(cell.id.is_none());
        assert!(cell.content.is_empty());
        assert!(!cell.validated);
        assert!(cell.cell_style.is_none());
    }
}

#[test]
fn cell_lookup_by_position() {
    let doc = Document::new_draft();
    assert_eq!(doc.cell(24).map(|cell| cell.position), Some(24));
    assert!(doc.cell(25).is_none());
}

#[test]
fn unsaved_fields_are_skipped_when_serialized() {
    let doc = Document::new_draft();
    let value = serde_json::to_value(&doc).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("titleWidth"));
    assert!(!object.contains_key("localImages"));
    assert_eq!(object["gridSize"], 5);
    assert_eq!(object["status"], "draft");
}
