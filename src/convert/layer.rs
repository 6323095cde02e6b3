//! Layer classification.

use crate::error::ObjectError;
use crate::model::LayerKind;
use crate::ofd::LayerRole;

/// Map a source layer role onto an editor layer category.
///
/// Every OFD role maps to exactly one category; unrecognized roles are
/// rejected rather than defaulted.
pub fn classify(role: &LayerRole) -> Result<LayerKind, ObjectError> {
    match role {
        LayerRole::Foreground => Ok(LayerKind::Foreground),
        LayerRole::Body => Ok(LayerKind::Body),
        LayerRole::Background => Ok(LayerKind::Background),
        LayerRole::Unrecognized(name) => Err(ObjectError::UnknownLayerRole(name.clone())),
    }
}
