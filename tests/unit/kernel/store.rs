use super::*;
use crate::kernel::state::CellPatch;
use crate::models::{Document, ImageRole, LocalImage, StylePatch};

fn new_store() -> Store {
    Store::new(EditorState::default())
}

/// Drive a fresh store through its first successful save: edit, request,
/// then feed back the "server" copy with an id assigned.
fn saved_store() -> Store {
    let mut store = new_store();
    store.dispatch(Action::SetTitle {
        title: "game night".into(),
    });
    let result = store.dispatch(Action::RequestSave);
    let [Effect::CreateDocument { document }] = result.effects.as_slice() else {
        panic!("expected a create effect");
    };
    let mut canonical = document.clone();
    canonical.id = Some(1);
    store.dispatch(Action::SaveCompleted {
        document: canonical,
    });
    store
}

#[test]
fn title_edits_undo_and_redo() {
    let mut store = new_store();
    store.dispatch(Action::SetTitle { title: "A".into() });
    store.dispatch(Action::SetTitle { title: "B".into() });

    let result = store.dispatch(Action::Undo);
    assert!(result.state_changed);
    assert_eq!(store.state().present().title, "A");

    let result = store.dispatch(Action::Redo);
    assert!(result.state_changed);
    assert_eq!(store.state().present().title, "B");
}

#[test]
fn undo_beyond_history_is_an_unchanged_dispatch() {
    let mut store = new_store();
    let result = store.dispatch(Action::Undo);
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());

    let result = store.dispatch(Action::Redo);
    assert!(!result.state_changed);
}

#[test]
fn edit_after_undo_discards_the_redo_branch() {
    let mut store = new_store();
    store.dispatch(Action::SetTitle { title: "A".into() });
    store.dispatch(Action::Undo);
    assert!(store.state().can_redo());

    store.dispatch(Action::SetTitle { title: "C".into() });

    assert!(!store.state().can_redo());
    assert!(!store.dispatch(Action::Redo).state_changed);
}

#[test]
fn update_cell_out_of_range_is_an_unchanged_dispatch() {
    let mut store = new_store();
    let result = store.dispatch(Action::UpdateCell {
        index: 400,
        patch: CellPatch {
            validated: Some(true),
            ..CellPatch::default()
        },
    });
    assert!(!result.state_changed);
    assert!(!store.state().can_undo());
}

#[test]
fn request_save_on_a_pristine_store_emits_nothing() {
    let mut store = new_store();
    let result = store.dispatch(Action::RequestSave);
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn request_save_for_an_unsaved_draft_ships_the_full_document() {
    let mut store = new_store();
    store.dispatch(Action::SetTitle {
        title: "first save".into(),
    });
    store.dispatch(Action::SetLocalImage {
        image: LocalImage::new(ImageRole::Background, "blob:pending"),
    });

    let result = store.dispatch(Action::RequestSave);

    let [Effect::CreateDocument { document }] = result.effects.as_slice() else {
        panic!("expected a create effect");
    };
    assert_eq!(document.title, "first save");
    assert!(document.id.is_none());
    // The transient queue stays on the client.
    assert!(document.local_images.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn save_completed_rebases_and_clears_the_unsaved_flag() {
    let store = saved_store();
    assert_eq!(store.state().present().id, Some(1));
    assert!(!store.state().can_save());
    assert!(store.state().changes_since_commit().is_empty());
}

#[test]
fn request_save_after_commit_ships_a_minimal_patch() {
    let mut store = saved_store();
    store.dispatch(Action::UpdateCell {
        index: 3,
        patch: CellPatch {
            validated: Some(true),
            ..CellPatch::default()
        },
    });

    let result = store.dispatch(Action::RequestSave);

    let [Effect::UpdateDocument { id, patch }] = result.effects.as_slice() else {
        panic!("expected an update effect");
    };
    assert_eq!(*id, 1);
    assert!(patch.title.is_none());
    assert!(patch.style.is_none());
    let cells = patch.cells.as_ref().unwrap();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].position, 3);
    assert!(cells[0].validated);
}

#[test]
fn request_save_with_a_clean_saved_document_emits_nothing() {
    let mut store = saved_store();
    let result = store.dispatch(Action::RequestSave);
    assert!(result.effects.is_empty());
}

#[test]
fn save_failed_keeps_history_and_the_unsaved_flag() {
    let mut store = saved_store();
    store.dispatch(Action::SetTitle {
        title: "retry me".into(),
    });
    store.dispatch(Action::Undo);
    store.dispatch(Action::SetTitle {
        title: "retry me again".into(),
    });

    let result = store.dispatch(Action::SaveFailed {
        message: "persistence gateway timed out".into(),
    });

    assert!(!result.state_changed);
    assert!(store.state().can_save());
    assert!(store.state().can_undo());
    // Retry still sees the same pending patch.
    let retry = store.dispatch(Action::RequestSave);
    assert!(matches!(
        retry.effects.as_slice(),
        [Effect::UpdateDocument { id: 1, .. }]
    ));
}

#[test]
fn request_image_upload_covers_the_pending_queue() {
    let mut store = new_store();
    assert!(store
        .dispatch(Action::RequestImageUpload)
        .effects
        .is_empty());

    store.dispatch(Action::SetLocalImage {
        image: LocalImage::new(ImageRole::Stamp, "blob:stamp"),
    });
    let result = store.dispatch(Action::RequestImageUpload);

    let [Effect::UploadImages { images }] = result.effects.as_slice() else {
        panic!("expected an upload effect");
    };
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].role, ImageRole::Stamp);
}

#[test]
fn clear_future_history_reports_change_only_when_redo_existed() {
    let mut store = new_store();
    assert!(!store.dispatch(Action::ClearFutureHistory).state_changed);

    store.dispatch(Action::SetTitle { title: "A".into() });
    store.dispatch(Action::Undo);
    assert!(store.dispatch(Action::ClearFutureHistory).state_changed);
    assert!(!store.state().can_redo());
}

#[test]
fn set_bingo_load_is_undoable_back_to_the_prior_draft() {
    let mut store = new_store();
    store.dispatch(Action::SetTitle {
        title: "local draft".into(),
    });

    let mut fetched = Document::new_draft();
    fetched.id = Some(9);
    fetched.title = "server card".into();
    store.dispatch(Action::SetBingo { document: fetched });
    assert_eq!(store.state().present().title, "server card");

    store.dispatch(Action::Undo);
    assert_eq!(store.state().present().title, "local draft");
}

#[test]
fn style_updates_clamp_through_the_dispatch_surface() {
    let mut store = new_store();
    store.dispatch(Action::UpdateStyle {
        patch: StylePatch {
            cell_size: Some(999),
            ..StylePatch::default()
        },
    });
    assert_eq!(store.state().present().style.cell_size, 200);
    assert_eq!(store.state().present().stamp.size, 180);
}
