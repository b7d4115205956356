use std::path::Path;

use foxglove_pipeline::schema::{
    CollectionDesc, CollisionObjectDesc, GuiSceneDesc, LuaModule, PrototypeDesc, ShapeType,
};
use foxglove_pipeline::{CompileContext, CompileOutput, PipelineError, Registry};

fn compile(registry: &Registry, root: &Path, source_path: &Path) -> CompileOutput {
    let rule = registry
        .rule_for_path(source_path)
        .unwrap_or_else(|| panic!("no rule for {}", source_path.display()));
    let bytes = std::fs::read(source_path).unwrap();
    let ctx = CompileContext {
        content_root: root,
        source_path,
    };
    rule.compile(&ctx, &bytes).unwrap()
}

fn binary(output: CompileOutput) -> Vec<u8> {
    match output {
        CompileOutput::Binary(bytes) => bytes,
        _ => panic!("expected a single binary output"),
    }
}

// ---------------------------------------------------------------------------
// Collision object: dynamic body with a merged convex shape
// ---------------------------------------------------------------------------

#[test]
fn collision_object_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(
        root.path().join("a.convexshape"),
        "(shape_type: Sphere, data: [0.5, 0.5, 0.5, 1.0])",
    )
    .unwrap();
    let source = root.path().join("body.collisionobject");
    std::fs::write(
        &source,
        "(type: Dynamic, mass: 10.0, collision_shape: \"/a.convexshape\")",
    )
    .unwrap();

    let registry = Registry::with_default_rules();
    let bytes = binary(compile(&registry, root.path(), &source));
    let out: CollisionObjectDesc = bincode::deserialize(&bytes).unwrap();

    assert_eq!(out.mass, 10.0);
    assert_eq!(out.collision_shape, "");
    assert_eq!(out.embedded_collision_shape.shapes.len(), 1);
    let shape = &out.embedded_collision_shape.shapes[0];
    assert_eq!(shape.shape_type, ShapeType::Sphere);
    assert_eq!(shape.index, 0);
    assert_eq!(shape.count, 4);
    assert_eq!(out.embedded_collision_shape.data.len(), 4);
}

// ---------------------------------------------------------------------------
// Game object decomposition: parent plus generated siblings
// ---------------------------------------------------------------------------

#[test]
fn game_object_decomposition_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("main")).unwrap();
    let source = root.path().join("main/hero.go");
    std::fs::write(
        &source,
        r#"(
            components: [
                (id: "logic", component: "/main/hero.script"),
            ],
            embedded_components: [
                (id: "view", type: "sprite",
                 data: "(tile_set: \"/tiles.tileset\", default_animation: \"idle\")"),
                (id: "steps", type: "wav", data: "pcm"),
            ],
        )"#,
    )
    .unwrap();

    let registry = Registry::with_default_rules();
    let decomposed = match compile(&registry, root.path(), &source) {
        CompileOutput::Decomposed(d) => d,
        _ => panic!("expected decomposition"),
    };

    // 1 parent + N siblings, parent emptied of embedded components.
    assert_eq!(decomposed.siblings.len(), 2);
    let parent: PrototypeDesc = bincode::deserialize(&decomposed.parent).unwrap();
    assert!(parent.embedded_components.is_empty());
    assert_eq!(parent.components.len(), 3);
    assert_eq!(parent.components[1].component, "/main/hero_generated_0.spritec");
    assert_eq!(parent.components[2].component, "/main/hero_generated_1.wavc");

    // Each sibling compiles through its own rule.
    for sibling in &decomposed.siblings {
        let sibling_path = root.path().join("main").join(&sibling.file_name);
        let rule = registry.rule_for_path(&sibling_path).unwrap();
        let ctx = CompileContext {
            content_root: root.path(),
            source_path: &sibling_path,
        };
        let output = rule.compile(&ctx, &sibling.data).unwrap();
        assert!(!binary(output).is_empty());
    }
}

// ---------------------------------------------------------------------------
// Collection: prototype and nested collection references
// ---------------------------------------------------------------------------

#[test]
fn collection_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("main.collection");
    std::fs::write(
        &source,
        r#"(
            name: "main",
            instances: [
                (id: "hero", prototype: "/main/hero.go"),
            ],
            collection_instances: [
                (id: "hud", collection: "/ui/hud.collection"),
            ],
        )"#,
    )
    .unwrap();

    let registry = Registry::with_default_rules();
    let bytes = binary(compile(&registry, root.path(), &source));
    let out: CollectionDesc = bincode::deserialize(&bytes).unwrap();
    assert_eq!(out.instances[0].prototype, "/main/hero.goc");
    assert_eq!(out.collection_instances[0].collection, "/ui/hud.collectionc");
}

// ---------------------------------------------------------------------------
// Scripts: dependency scanning through the registry
// ---------------------------------------------------------------------------

#[test]
fn script_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("hero.script");
    std::fs::write(
        &source,
        "-- hero logic\nrequire \"util.math\"\nrequire(\"ai.patrol\")\n--[[\nrequire \"dead\"\n--]]\nfunction init(self) end\n",
    )
    .unwrap();

    let registry = Registry::with_default_rules();
    let bytes = binary(compile(&registry, root.path(), &source));
    let module: LuaModule = bincode::deserialize(&bytes).unwrap();
    assert_eq!(module.modules, vec!["util.math", "ai.patrol"]);
    assert_eq!(module.resources, vec!["/util/math.luac", "/ai/patrol.luac"]);
    assert!(module.script.contains("function init"));
}

// ---------------------------------------------------------------------------
// GUI: validation failures surface as errors, valid scenes compile
// ---------------------------------------------------------------------------

#[test]
fn gui_scene_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("menu.gui");
    std::fs::write(
        &source,
        r#"(
            script: "/ui/menu.gui_script",
            textures: [(name: "bg", texture: "/img/bg.png")],
            fonts: [(name: "title", font: "/fonts/big.font")],
            nodes: [(id: "backdrop", texture: "bg", font: "title")],
        )"#,
    )
    .unwrap();

    let registry = Registry::with_default_rules();
    let bytes = binary(compile(&registry, root.path(), &source));
    let out: GuiSceneDesc = bincode::deserialize(&bytes).unwrap();
    assert_eq!(out.script, "/ui/menu.gui_scriptc");
    assert_eq!(out.textures[0].texture, "/img/bg.texturec");
}

#[test]
fn gui_scene_with_undeclared_texture_fails() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("menu.gui");
    std::fs::write(&source, r#"(nodes: [(id: "n", texture: "ghost")])"#).unwrap();

    let registry = Registry::with_default_rules();
    let rule = registry.rule_for_path(&source).unwrap();
    let ctx = CompileContext {
        content_root: root.path(),
        source_path: &source,
    };
    let err = rule
        .compile(&ctx, &std::fs::read(&source).unwrap())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Validation(_)));
}
