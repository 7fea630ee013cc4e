use std::sync::mpsc::{self, Receiver, Sender};

use crate::assets::AssetStorage;
use crate::commands::Cmd;
use crate::fonts::FontCatalog;
use crate::messages::{AppMsg, Msg};
use crate::model::{CellRef, SpecimenId, StudioModel};
use crate::store::{SpecimenStore, StoreError};
use crate::surface::RichTextSurface;
use crate::template::Template;
use crate::update::update;

/// One open specimen plus the collaborators its commands run against.
///
/// Commands execute synchronously; their completion messages are queued and
/// fed back through `update` before `dispatch` returns.
pub struct Studio<S: SpecimenStore, A: AssetStorage> {
    model: StudioModel,
    store: S,
    assets: A,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<S: SpecimenStore, A: AssetStorage> Studio<S, A> {
    /// Load `id` from `store` and open it in a fresh model
    pub fn open(
        store: S,
        assets: A,
        fonts: &dyn FontCatalog,
        templates: Vec<Template>,
        id: &SpecimenId,
    ) -> Result<Self, StoreError> {
        let specimen = store.get(id)?;
        tracing::info!(specimen = %id, pages = specimen.pages.len(), "opened specimen");
        let model = StudioModel::new(specimen, templates, fonts.fonts().to_vec());
        let (msg_tx, msg_rx) = mpsc::channel();
        Ok(Self {
            model,
            store,
            assets,
            msg_tx,
            msg_rx,
        })
    }

    pub fn model(&self) -> &StudioModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut StudioModel {
        &mut self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Run `msg` through `update`, execute the resulting commands, and keep
    /// going until no completion messages remain.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take().or_else(|| self.msg_rx.try_recv().ok()) {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    /// Dispatch several messages in order
    pub fn dispatch_all(&mut self, msgs: impl IntoIterator<Item = Msg>) {
        for msg in msgs {
            self.dispatch(msg);
        }
    }

    /// Dispatch `msgs` in order, stopping at the first surfaced error
    pub fn dispatch_script(&mut self, msgs: impl IntoIterator<Item = Msg>) -> Result<(), String> {
        for msg in msgs {
            self.dispatch(msg);
            if let Some(error) = &self.model.ui.last_error {
                return Err(error.clone());
            }
        }
        Ok(())
    }

    /// Bind a mounted rich-text surface to `cell`
    pub fn attach_surface(&mut self, cell: CellRef, surface: Box<dyn RichTextSurface>) {
        self.model.attach_surface(cell, surface);
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::PersistSpecimen { specimen_id, patch } => {
                let result = self
                    .store
                    .update(&specimen_id, patch)
                    .map_err(|e| e.to_string());
                if result.is_ok() {
                    tracing::info!(specimen = %specimen_id, "persisted");
                }
                let _ = self.msg_tx.send(Msg::App(AppMsg::PersistCompleted(result)));
            }
            Cmd::UploadAsset {
                target,
                file,
                folder,
                owner_id,
            } => {
                let result = self
                    .assets
                    .upload(&file, &folder, &owner_id)
                    .map_err(|e| e.to_string());
                let _ = self
                    .msg_tx
                    .send(Msg::App(AppMsg::UploadCompleted { target, result }));
            }
        }
    }

    /// Tear down, returning the model and collaborators
    pub fn into_parts(self) -> (StudioModel, S, A) {
        (self.model, self.store, self.assets)
    }
}
