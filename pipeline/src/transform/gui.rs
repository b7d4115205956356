//! GUI scene transform and reference validation.

use std::collections::HashSet;

use crate::error::{PipelineError, PipelineResult};
use crate::rewrite::{rewrite_pair, rewrite_texture};
use crate::schema::GuiSceneDesc;

use super::CompileContext;

/// Rewrite the script, font and texture references, then check that every
/// node's texture/font name was declared in the scene.
///
/// Declaration order does not matter. Uniqueness of declared names is not
/// enforced; validation only tests membership.
pub fn transform_gui_scene(
    _ctx: &CompileContext,
    mut msg: GuiSceneDesc,
) -> PipelineResult<GuiSceneDesc> {
    msg.script = rewrite_pair(&msg.script, ".gui_script", ".gui_scriptc");

    let mut font_names = HashSet::new();
    for f in &mut msg.fonts {
        font_names.insert(f.name.clone());
        f.font = rewrite_pair(&f.font, ".font", ".fontc");
    }

    let mut texture_names = HashSet::new();
    for t in &mut msg.textures {
        texture_names.insert(t.name.clone());
        t.texture = rewrite_texture(&t.texture);
    }

    for node in &msg.nodes {
        if !node.texture.is_empty() && !texture_names.contains(&node.texture) {
            return Err(PipelineError::Validation(format!(
                "texture \"{}\" not declared in gui scene",
                node.texture
            )));
        }
        if !node.font.is_empty() && !font_names.contains(&node.font) {
            return Err(PipelineError::Validation(format!(
                "font \"{}\" not declared in gui scene",
                node.font
            )));
        }
    }
    Ok(msg)
}
