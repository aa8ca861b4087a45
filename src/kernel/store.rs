use super::{Action, EditorState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
        }
    }
}

pub struct Store {
    state: EditorState,
}

impl Store {
    pub fn new(state: EditorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetTitle { title } => {
                self.state.set_title(title);
                DispatchResult::changed()
            }
            Action::SetTitleWidth { title_width } => {
                self.state.set_title_width(title_width);
                DispatchResult::changed()
            }
            Action::SetGridSize { n } => {
                if self.state.set_grid_size(n) {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::UpdateCell { index, patch } => {
                if self.state.update_cell(index, patch) {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::UpdateStyle { patch } => {
                self.state.update_style(patch);
                DispatchResult::changed()
            }
            Action::UpdateBackground { patch } => {
                self.state.update_background(patch);
                DispatchResult::changed()
            }
            Action::UpdateStamp { patch } => {
                self.state.update_stamp(patch);
                DispatchResult::changed()
            }
            Action::ToggleStamp { index } => {
                if self.state.toggle_stamp(index) {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::SetStatus { status } => {
                self.state.set_status(status);
                DispatchResult::changed()
            }
            Action::SetBingo { document } => {
                self.state.set_bingo(document);
                DispatchResult::changed()
            }
            Action::Undo => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.undo(),
            },
            Action::Redo => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.redo(),
            },
            Action::Reset => {
                self.state.reset();
                DispatchResult::changed()
            }
            Action::ClearFutureHistory => {
                let had_future = self.state.can_redo();
                self.state.clear_future_history();
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: had_future,
                }
            }
            Action::SetLocalImage { image } => {
                self.state.set_local_image(image);
                DispatchResult::changed()
            }
            Action::RemoveCellLocalImage { index } => {
                if self.state.remove_cell_local_image(index) {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::RemoveLocalBackgroundImage => {
                if self.state.remove_local_background_image() {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::SetImageUrls { urls } => {
                if urls.is_empty() {
                    return DispatchResult::unchanged();
                }
                self.state.set_image_urls(urls);
                DispatchResult::changed()
            }
            Action::RequestImageUpload => {
                let images = self.state.present().local_images.clone();
                if images.is_empty() {
                    return DispatchResult::unchanged();
                }
                DispatchResult::effect(Effect::UploadImages { images })
            }
            Action::RequestSave => self.request_save(),
            Action::SaveCompleted { document } => {
                self.state.rebase_committed(document);
                DispatchResult::changed()
            }
            Action::SaveFailed { message } => {
                // Contract: no baseline rebase, no future clearing. The undo
                // trail and the unsaved-changes flag stay accurate for retry.
                tracing::warn!(error = %message, "save failed; keeping local history");
                DispatchResult::unchanged()
            }
        }
    }

    fn request_save(&self) -> DispatchResult {
        match self.state.present().id {
            None => {
                if !self.state.can_save() {
                    return DispatchResult::unchanged();
                }
                let mut document = self.state.present().clone();
                document.local_images.clear();
                DispatchResult::effect(Effect::CreateDocument { document })
            }
            Some(id) => {
                let patch = self.state.changes_since_commit();
                if patch.is_empty() {
                    tracing::debug!(id, "request_save with no changes");
                    return DispatchResult::unchanged();
                }
                DispatchResult::effect(Effect::UpdateDocument { id, patch })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
