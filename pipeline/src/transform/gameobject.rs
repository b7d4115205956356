//! Game object component reference rewriting.
//!
//! This is the reference-only half of game object compilation; embedded
//! components are handled by [`decompose`](crate::decompose) before this
//! transform runs.

use crate::error::PipelineResult;
use crate::rewrite::rewrite_component;
use crate::schema::PrototypeDesc;

use super::CompileContext;

pub fn transform_gameobject(
    _ctx: &CompileContext,
    mut msg: PrototypeDesc,
) -> PipelineResult<PrototypeDesc> {
    for c in &mut msg.components {
        c.component = rewrite_component(&c.component);
    }
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ComponentDesc;
    use std::path::Path;

    #[test]
    fn rewrites_every_component_kind() {
        let refs = [
            ("/a.camera", "/a.camerac"),
            ("/a.collectionproxy", "/a.collectionproxyc"),
            ("/a.collisionobject", "/a.collisionobjectc"),
            ("/a.emitter", "/a.emitterc"),
            ("/a.gui", "/a.guic"),
            ("/a.model", "/a.modelc"),
            ("/a.script", "/a.scriptc"),
            ("/a.wav", "/a.wavc"),
            ("/a.factory", "/a.factoryc"),
            ("/a.light", "/a.lightc"),
            ("/a.sprite", "/a.spritec"),
            ("/a.tileset", "/a.tilesetc"),
            ("/a.tilesource", "/a.tilesetc"),
            ("/a.tilegrid", "/a.tilegridc"),
            ("/a.tilemap", "/a.tilegridc"),
        ];
        let msg = PrototypeDesc {
            components: refs
                .iter()
                .map(|(source, _)| ComponentDesc {
                    id: "c".into(),
                    component: (*source).into(),
                    ..Default::default()
                })
                .collect(),
            embedded_components: Vec::new(),
        };
        let ctx = CompileContext {
            content_root: Path::new("/content"),
            source_path: Path::new("/content/a.go"),
        };
        let out = transform_gameobject(&ctx, msg).unwrap();
        for (component, (_, expected)) in out.components.iter().zip(refs.iter()) {
            assert_eq!(component.component, *expected);
        }
    }
}
