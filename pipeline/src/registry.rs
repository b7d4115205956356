//! Compile rule registry and dispatch.
//!
//! Every resource type the pipeline understands is a variant of
//! [`ResourceKind`]; adding a type means adding a variant and its dispatch
//! arm, not patching tables at runtime. A [`Rule`] binds a kind to its
//! source/target extension pair; the [`Registry`] is the lookup table the
//! scheduler consults when it encounters a file.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::decompose::{compile_game_object, DecomposedGameObject};
use crate::error::PipelineResult;
use crate::schema::{
    CameraDesc, CollectionDesc, CollectionProxyDesc, CollisionObjectDesc, ConvexShape,
    EmitterDesc, FactoryDesc, GamepadMaps, GuiSceneDesc, InputBinding, LightDesc, ModelDesc,
    RenderPrototypeDesc, SpriteDesc, TileGridDesc,
};
use crate::script::compile_script;
use crate::transform::{
    transform_collection, transform_collection_proxy, transform_collision_object,
    transform_emitter, transform_factory, transform_gui_scene, transform_model, transform_render,
    transform_sprite, transform_tilegrid, CompileContext,
};

/// Closed set of resource kinds the pipeline can compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Collection,
    CollectionProxy,
    Emitter,
    Model,
    ConvexShape,
    CollisionObject,
    GuiScene,
    Camera,
    InputBinding,
    Gamepads,
    Factory,
    Light,
    RenderPrototype,
    Sprite,
    TileGrid,
    GameObject,
    Script,
    LuaScript,
    Wav,
    RenderScript,
    GuiScript,
    Project,
    Mesh,
    TileSet,
}

/// Result of compiling one source file.
#[derive(Debug)]
pub enum CompileOutput {
    /// Compiled bytes for the single target file.
    Binary(Vec<u8>),
    /// Parent bytes plus sibling sources; siblings compile before the
    /// parent output is written.
    Decomposed(DecomposedGameObject),
    /// The scheduler must run `tool <source> <target>` itself.
    External { tool: &'static str },
}

/// Binds a resource kind to its file extensions.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub kind: ResourceKind,
    pub type_name: &'static str,
    pub source_ext: &'static str,
    pub target_ext: &'static str,
}

impl Rule {
    /// Target file name for a given source file name.
    ///
    /// Returns `None` if the name does not carry this rule's source suffix.
    pub fn output_name(&self, file_name: &str) -> Option<String> {
        file_name
            .strip_suffix(self.source_ext)
            .map(|stem| format!("{stem}{}", self.target_ext))
    }

    /// Decode, transform and encode one source file.
    pub fn compile(&self, ctx: &CompileContext, source: &[u8]) -> PipelineResult<CompileOutput> {
        match self.kind {
            ResourceKind::Collection => {
                compile_message::<CollectionDesc>(ctx, source, transform_collection)
            }
            ResourceKind::CollectionProxy => {
                compile_message::<CollectionProxyDesc>(ctx, source, transform_collection_proxy)
            }
            ResourceKind::Emitter => compile_message::<EmitterDesc>(ctx, source, transform_emitter),
            ResourceKind::Model => compile_message::<ModelDesc>(ctx, source, transform_model),
            ResourceKind::ConvexShape => compile_message::<ConvexShape>(ctx, source, identity),
            ResourceKind::CollisionObject => {
                compile_message::<CollisionObjectDesc>(ctx, source, transform_collision_object)
            }
            ResourceKind::GuiScene => {
                compile_message::<GuiSceneDesc>(ctx, source, transform_gui_scene)
            }
            ResourceKind::Camera => compile_message::<CameraDesc>(ctx, source, identity),
            ResourceKind::InputBinding => compile_message::<InputBinding>(ctx, source, identity),
            ResourceKind::Gamepads => compile_message::<GamepadMaps>(ctx, source, identity),
            ResourceKind::Factory => compile_message::<FactoryDesc>(ctx, source, transform_factory),
            ResourceKind::Light => compile_message::<LightDesc>(ctx, source, identity),
            ResourceKind::RenderPrototype => {
                compile_message::<RenderPrototypeDesc>(ctx, source, transform_render)
            }
            ResourceKind::Sprite => compile_message::<SpriteDesc>(ctx, source, transform_sprite),
            ResourceKind::TileGrid => {
                compile_message::<TileGridDesc>(ctx, source, transform_tilegrid)
            }
            ResourceKind::GameObject => {
                Ok(CompileOutput::Decomposed(compile_game_object(ctx, source)?))
            }
            ResourceKind::Script | ResourceKind::LuaScript => {
                Ok(CompileOutput::Binary(compile_script(source)?))
            }
            ResourceKind::Wav
            | ResourceKind::RenderScript
            | ResourceKind::GuiScript
            | ResourceKind::Project => Ok(CompileOutput::Binary(source.to_vec())),
            ResourceKind::Mesh => Ok(CompileOutput::External { tool: "meshc" }),
            ResourceKind::TileSet => Ok(CompileOutput::External { tool: "tilesetc" }),
        }
    }
}

fn compile_message<T>(
    ctx: &CompileContext,
    source: &[u8],
    transform: impl FnOnce(&CompileContext, T) -> PipelineResult<T>,
) -> PipelineResult<CompileOutput>
where
    T: DeserializeOwned + Serialize,
{
    let msg: T = codec::decode_text(source)?;
    let msg = transform(ctx, msg)?;
    Ok(CompileOutput::Binary(codec::encode_binary(&msg)?))
}

fn identity<T>(_ctx: &CompileContext, msg: T) -> PipelineResult<T> {
    Ok(msg)
}

/// Lookup table from source extension to compile rule.
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    /// An empty registry. Useful for schedulers that install their own rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The full default rule set.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        let mut rule = |kind, type_name, source_ext, target_ext| {
            registry.register_rule(kind, type_name, source_ext, target_ext);
        };
        rule(ResourceKind::Collection, "collection", ".collection", ".collectionc");
        rule(ResourceKind::CollectionProxy, "collectionproxy", ".collectionproxy", ".collectionproxyc");
        rule(ResourceKind::Emitter, "emitter", ".emitter", ".emitterc");
        rule(ResourceKind::Model, "model", ".model", ".modelc");
        rule(ResourceKind::ConvexShape, "convexshape", ".convexshape", ".convexshapec");
        rule(ResourceKind::CollisionObject, "collisionobject", ".collisionobject", ".collisionobjectc");
        rule(ResourceKind::GuiScene, "gui", ".gui", ".guic");
        rule(ResourceKind::Camera, "camera", ".camera", ".camerac");
        rule(ResourceKind::InputBinding, "input_binding", ".input_binding", ".input_bindingc");
        rule(ResourceKind::Gamepads, "gamepads", ".gamepads", ".gamepadsc");
        rule(ResourceKind::Factory, "factory", ".factory", ".factoryc");
        rule(ResourceKind::Light, "light", ".light", ".lightc");
        rule(ResourceKind::RenderPrototype, "render", ".render", ".renderc");
        rule(ResourceKind::Sprite, "sprite", ".sprite", ".spritec");
        rule(ResourceKind::TileGrid, "tilegrid", ".tilegrid", ".tilegridc");
        rule(ResourceKind::TileGrid, "tilemap", ".tilemap", ".tilegridc");
        rule(ResourceKind::GameObject, "gameobject", ".go", ".goc");
        rule(ResourceKind::Script, "script", ".script", ".scriptc");
        rule(ResourceKind::LuaScript, "lua", ".lua", ".luac");
        rule(ResourceKind::Wav, "wav", ".wav", ".wavc");
        rule(ResourceKind::RenderScript, "render_script", ".render_script", ".render_scriptc");
        rule(ResourceKind::GuiScript, "gui_script", ".gui_script", ".gui_scriptc");
        rule(ResourceKind::Project, "project", ".project", ".projectc");
        rule(ResourceKind::Mesh, "mesh", ".dae", ".meshc");
        rule(ResourceKind::TileSet, "tileset", ".tileset", ".tilesetc");
        rule(ResourceKind::TileSet, "tilesource", ".tilesource", ".tilesetc");
        registry
    }

    /// Install one rule. Later registrations never shadow earlier ones.
    pub fn register_rule(
        &mut self,
        kind: ResourceKind,
        type_name: &'static str,
        source_ext: &'static str,
        target_ext: &'static str,
    ) {
        self.rules.push(Rule {
            kind,
            type_name,
            source_ext,
            target_ext,
        });
    }

    /// Find the rule whose source extension matches the file name.
    pub fn rule_for_path(&self, path: &Path) -> Option<&Rule> {
        let name = path.file_name()?.to_str()?;
        self.rules
            .iter()
            .find(|rule| name.ends_with(rule.source_ext))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
