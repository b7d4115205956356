//! Compiled script module payload.

use serde::{Deserialize, Serialize};

/// Compiled form of a `.script` / `.lua` file.
///
/// Carries the source verbatim plus the module dependency edges discovered
/// by the scanner: dotted module names and their resolved compiled paths.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LuaModule {
    pub script: String,
    pub r#type: LuaModuleType,
    pub modules: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuaModuleType {
    #[default]
    Text,
    Bytecode,
}
