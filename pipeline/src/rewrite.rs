//! Source-extension to compiled-extension rewriting.
//!
//! The runtime resource loader only understands compiled suffixes (source
//! suffix plus a trailing `c`), so every cross-file reference inside a
//! descriptor is rewritten at compile time. Rules are suffix replacements;
//! the first matching rule wins and unmatched paths pass through unchanged.
//! No rule matches a compiled suffix, which makes rewriting idempotent.

/// Full source → compiled suffix table.
const COMPILED_EXTENSIONS: &[(&str, &str)] = &[
    (".png", ".texturec"),
    (".jpg", ".texturec"),
    (".go", ".goc"),
    (".collection", ".collectionc"),
    (".material", ".materialc"),
    (".dae", ".meshc"),
    (".font", ".fontc"),
    (".camera", ".camerac"),
    (".collectionproxy", ".collectionproxyc"),
    (".collisionobject", ".collisionobjectc"),
    (".emitter", ".emitterc"),
    (".gui_script", ".gui_scriptc"),
    (".render_script", ".render_scriptc"),
    (".gui", ".guic"),
    (".model", ".modelc"),
    (".script", ".scriptc"),
    (".wav", ".wavc"),
    (".factory", ".factoryc"),
    (".light", ".lightc"),
    (".sprite", ".spritec"),
    (".tileset", ".tilesetc"),
    (".tilesource", ".tilesetc"),
    (".tilegrid", ".tilegridc"),
    (".tilemap", ".tilegridc"),
    (".convexshape", ".convexshapec"),
];

/// Suffixes allowed as game object component references.
const COMPONENT_EXTENSIONS: &[(&str, &str)] = &[
    (".camera", ".camerac"),
    (".collectionproxy", ".collectionproxyc"),
    (".collisionobject", ".collisionobjectc"),
    (".emitter", ".emitterc"),
    (".gui", ".guic"),
    (".model", ".modelc"),
    (".script", ".scriptc"),
    (".wav", ".wavc"),
    (".factory", ".factoryc"),
    (".light", ".lightc"),
    (".sprite", ".spritec"),
    (".tileset", ".tilesetc"),
    (".tilesource", ".tilesetc"),
    (".tilegrid", ".tilegridc"),
    (".tilemap", ".tilegridc"),
];

fn rewrite_with(table: &[(&str, &str)], path: &str) -> String {
    for (source, compiled) in table {
        if let Some(stem) = path.strip_suffix(source) {
            return format!("{stem}{compiled}");
        }
    }
    path.to_string()
}

/// Rewrite any known source suffix to its compiled counterpart.
pub fn rewrite(path: &str) -> String {
    rewrite_with(COMPILED_EXTENSIONS, path)
}

/// Rewrite a game object component reference.
pub fn rewrite_component(path: &str) -> String {
    rewrite_with(COMPONENT_EXTENSIONS, path)
}

/// Rewrite a texture name (png/jpg only).
pub fn rewrite_texture(name: &str) -> String {
    let name = rewrite_pair(name, ".png", ".texturec");
    rewrite_pair(&name, ".jpg", ".texturec")
}

/// Rewrite one specific suffix pair, leaving everything else unchanged.
pub fn rewrite_pair(path: &str, source_ext: &str, target_ext: &str) -> String {
    match path.strip_suffix(source_ext) {
        Some(stem) => format!("{stem}{target_ext}"),
        None => path.to_string(),
    }
}
