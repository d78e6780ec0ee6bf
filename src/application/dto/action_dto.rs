//! Action-callback envelope DTO.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The host-defined envelope delivered with every action-button click.
///
/// The `context` map is the button's context returned verbatim; the envelope
/// itself contributes the channel and the ephemeral post the button lives on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionRequest {
    /// Channel the clicked post belongs to.
    #[serde(default)]
    pub channel_id: String,
    /// Id of the post carrying the clicked button.
    #[serde(default)]
    pub post_id: String,
    /// Opaque button context.
    #[serde(default)]
    pub context: Map<String, Value>,
}
