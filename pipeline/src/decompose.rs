//! Game object decomposition.
//!
//! A `.go` prototype may inline component definitions. Compilation splits
//! such a file into a slimmed parent that references ordinary component
//! files, plus one generated sibling source per embedded component. The
//! sibling sources are returned to the caller: writing them next to the
//! parent and compiling them through their own rules is the scheduler's
//! job, and the parent's compiled output must not land before its siblings
//! have compiled (an explicit sibling → parent edge).

use std::path::Path;

use crate::codec;
use crate::error::{PipelineError, PipelineResult};
use crate::path;
use crate::schema::{ComponentDesc, PrototypeDesc};
use crate::transform::{transform_gameobject, CompileContext};

/// A generated sibling source file, not yet compiled.
#[derive(Clone, Debug)]
pub struct SiblingSource {
    /// File name next to the parent source, e.g. `hero_generated_0.sprite`.
    pub file_name: String,
    /// Verbatim payload of the embedded component.
    pub data: Vec<u8>,
}

/// Result of decomposing one game object.
#[derive(Clone, Debug)]
pub struct DecomposedGameObject {
    /// Compiled parent prototype, free of embedded components.
    pub parent: Vec<u8>,
    /// Sibling sources that must be written and compiled before the parent
    /// output is written.
    pub siblings: Vec<SiblingSource>,
}

/// Decompose and compile a game object prototype.
///
/// Sibling names are deterministic — `{basename}_generated_{index}.{type}`
/// with the zero-based position among embedded components — so re-running
/// on identical input reproduces identical outputs. Fails with a
/// missing-field error if an embedded component has no `id`.
pub fn compile_game_object(
    ctx: &CompileContext,
    source: &[u8],
) -> PipelineResult<DecomposedGameObject> {
    let mut msg: PrototypeDesc = codec::decode_text(source)?;

    let basename = generated_basename(ctx.source_path);
    let rel_dir = path::rel_dir(ctx.content_root, ctx.source_path);

    let mut siblings = Vec::with_capacity(msg.embedded_components.len());
    for (index, embedded) in msg.embedded_components.iter().enumerate() {
        if embedded.id.is_empty() {
            return Err(PipelineError::MissingField { field: "id" });
        }
        let file_name = format!("{basename}_generated_{index}.{}", embedded.r#type);
        msg.components.push(ComponentDesc {
            id: embedded.id.clone(),
            component: path::component_path(&rel_dir, &file_name),
            position: embedded.position,
            rotation: embedded.rotation,
        });
        siblings.push(SiblingSource {
            file_name,
            data: embedded.data.clone().into_bytes(),
        });
    }
    msg.embedded_components.clear();
    if !siblings.is_empty() {
        log::debug!(
            "{}: extracted {} embedded components",
            ctx.source_path.display(),
            siblings.len()
        );
    }

    let msg = transform_gameobject(ctx, msg)?;
    Ok(DecomposedGameObject {
        parent: codec::encode_binary(&msg)?,
        siblings,
    })
}

fn generated_basename(source_path: &Path) -> String {
    let name = source_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Quat, Vec3};

    const GO_SOURCE: &str = r#"(
        components: [
            (id: "body", component: "/main/hero.collisionobject"),
        ],
        embedded_components: [
            (
                id: "view",
                type: "sprite",
                data: "(tile_set: \"/tiles/hero.tileset\", default_animation: \"idle\")",
                position: (x: 1.0, y: 2.0, z: 3.0),
            ),
            (
                id: "steps",
                type: "wav",
                data: "steps",
            ),
        ],
    )"#;

    fn ctx<'a>(root: &'a Path, source: &'a Path) -> CompileContext<'a> {
        CompileContext {
            content_root: root,
            source_path: source,
        }
    }

    #[test]
    fn splits_embedded_components_into_siblings() {
        let root = Path::new("/content");
        let source = Path::new("/content/main/hero.go");
        let out = compile_game_object(&ctx(root, source), GO_SOURCE.as_bytes()).unwrap();

        assert_eq!(out.siblings.len(), 2);
        assert_eq!(out.siblings[0].file_name, "hero_generated_0.sprite");
        assert_eq!(out.siblings[1].file_name, "hero_generated_1.wav");
        assert_eq!(out.siblings[1].data, b"steps");

        let parent: PrototypeDesc = bincode::deserialize(&out.parent).unwrap();
        assert!(parent.embedded_components.is_empty());
        assert_eq!(parent.components.len(), 3);
        assert_eq!(parent.components[0].component, "/main/hero.collisionobjectc");
        assert_eq!(parent.components[1].id, "view");
        assert_eq!(parent.components[1].component, "/main/hero_generated_0.spritec");
        assert_eq!(parent.components[1].position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(parent.components[1].rotation, Quat::IDENTITY);
        assert_eq!(parent.components[2].component, "/main/hero_generated_1.wavc");
    }

    #[test]
    fn decomposition_is_deterministic() {
        let root = Path::new("/content");
        let source = Path::new("/content/main/hero.go");
        let first = compile_game_object(&ctx(root, source), GO_SOURCE.as_bytes()).unwrap();
        let second = compile_game_object(&ctx(root, source), GO_SOURCE.as_bytes()).unwrap();
        assert_eq!(first.parent, second.parent);
        let names: Vec<_> = first.siblings.iter().map(|s| &s.file_name).collect();
        let names_again: Vec<_> = second.siblings.iter().map(|s| &s.file_name).collect();
        assert_eq!(names, names_again);
    }

    #[test]
    fn missing_embedded_id_fails() {
        let source = r#"(
            embedded_components: [
                (type: "sprite", data: "(tile_set: \"/t.tileset\")"),
            ],
        )"#;
        let err = compile_game_object(
            &ctx(Path::new("/content"), Path::new("/content/a.go")),
            source.as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "id" }));
    }

    #[test]
    fn root_level_parent_gets_single_slash_paths() {
        let source = r#"(
            embedded_components: [
                (id: "view", type: "sprite", data: "()"),
            ],
        )"#;
        let out = compile_game_object(
            &ctx(Path::new("/content"), Path::new("/content/hero.go")),
            source.as_bytes(),
        )
        .unwrap();
        let parent: PrototypeDesc = bincode::deserialize(&out.parent).unwrap();
        assert_eq!(parent.components[0].component, "/hero_generated_0.spritec");
    }

    #[test]
    fn multi_dot_basename_uses_first_segment() {
        let source = r#"(
            embedded_components: [
                (id: "view", type: "sprite", data: "()"),
            ],
        )"#;
        let out = compile_game_object(
            &ctx(Path::new("/content"), Path::new("/content/hero.old.go")),
            source.as_bytes(),
        )
        .unwrap();
        assert_eq!(out.siblings[0].file_name, "hero_generated_0.sprite");
    }

    #[test]
    fn plain_prototype_has_no_siblings() {
        let source = r#"(
            components: [
                (id: "logic", component: "/main/hero.script"),
            ],
        )"#;
        let out = compile_game_object(
            &ctx(Path::new("/content"), Path::new("/content/hero.go")),
            source.as_bytes(),
        )
        .unwrap();
        assert!(out.siblings.is_empty());
        let parent: PrototypeDesc = bincode::deserialize(&out.parent).unwrap();
        assert_eq!(parent.components[0].component, "/main/hero.scriptc");
    }
}
