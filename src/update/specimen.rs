//! Specimen-wide settings handlers (format, orientation)

use crate::commands::Cmd;
use crate::messages::SpecimenMsg;
use crate::model::{SpecimenPatch, StudioModel};

use super::persist;

/// Handle specimen messages
pub fn update_specimen(model: &mut StudioModel, msg: SpecimenMsg) -> Option<Cmd> {
    match msg {
        SpecimenMsg::SetFormat(format) => {
            if model.specimen.format == format {
                return None;
            }
            model.specimen.format = format;
            persist(
                model,
                SpecimenPatch {
                    format: Some(format),
                    ..SpecimenPatch::default()
                },
            )
        }

        SpecimenMsg::SetOrientation(orientation) => {
            if model.specimen.orientation == orientation {
                return None;
            }
            model.specimen.orientation = orientation;
            persist(
                model,
                SpecimenPatch {
                    orientation: Some(orientation),
                    ..SpecimenPatch::default()
                },
            )
        }
    }
}
