//! Transforms for the remaining reference-only resource types.

use crate::error::PipelineResult;
use crate::rewrite::{rewrite_pair, rewrite_texture};
use crate::schema::{
    EmitterDesc, FactoryDesc, ModelDesc, RenderPrototypeDesc, SpriteDesc, TileGridDesc,
};

use super::CompileContext;

pub fn transform_emitter(_ctx: &CompileContext, mut msg: EmitterDesc) -> PipelineResult<EmitterDesc> {
    msg.material = rewrite_pair(&msg.material, ".material", ".materialc");
    msg.texture.name = rewrite_texture(&msg.texture.name);
    Ok(msg)
}

pub fn transform_model(_ctx: &CompileContext, mut msg: ModelDesc) -> PipelineResult<ModelDesc> {
    msg.mesh = rewrite_pair(&msg.mesh, ".dae", ".meshc");
    msg.material = rewrite_pair(&msg.material, ".material", ".materialc");
    for texture in &mut msg.textures {
        *texture = rewrite_texture(texture);
    }
    Ok(msg)
}

pub fn transform_factory(_ctx: &CompileContext, mut msg: FactoryDesc) -> PipelineResult<FactoryDesc> {
    msg.prototype = rewrite_pair(&msg.prototype, ".go", ".goc");
    Ok(msg)
}

pub fn transform_render(
    _ctx: &CompileContext,
    mut msg: RenderPrototypeDesc,
) -> PipelineResult<RenderPrototypeDesc> {
    msg.script = rewrite_pair(&msg.script, ".render_script", ".render_scriptc");
    for m in &mut msg.materials {
        m.material = rewrite_pair(&m.material, ".material", ".materialc");
    }
    Ok(msg)
}

pub fn transform_sprite(_ctx: &CompileContext, mut msg: SpriteDesc) -> PipelineResult<SpriteDesc> {
    msg.tile_set = rewrite_tile_set(&msg.tile_set);
    Ok(msg)
}

pub fn transform_tilegrid(
    _ctx: &CompileContext,
    mut msg: TileGridDesc,
) -> PipelineResult<TileGridDesc> {
    msg.tile_set = rewrite_tile_set(&msg.tile_set);
    Ok(msg)
}

fn rewrite_tile_set(path: &str) -> String {
    let path = rewrite_pair(path, ".tileset", ".tilesetc");
    rewrite_pair(&path, ".tilesource", ".tilesetc")
}
