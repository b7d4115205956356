//! Script dependency scanning.
//!
//! Lexically scans Lua source for `require` statements and emits a
//! [`LuaModule`] carrying the source verbatim plus the discovered module
//! dependency edges. Only whole-line requires count: the statement must be
//! the entire (trimmed) line, in either `require "a.b"` or `require("a.b")`
//! form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::codec;
use crate::error::{PipelineError, PipelineResult};
use crate::schema::{LuaModule, LuaModuleType};

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)--\[\[.*?--\]\]").unwrap());
static REQUIRE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^require\s*"(.*?)"$"#).unwrap());
static REQUIRE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^require\s*\(\s*"(.*?)"\s*\)$"#).unwrap());

/// Drop single-line comments while keeping block comment delimiters.
///
/// A line whose trimmed content starts with `--` is a comment, except when
/// it starts with `--[[` or `--]]` — those delimit multi-line blocks and are
/// handled by the block pass. Note that `---[[` is a plain comment: adding a
/// hyphen is the conventional way to switch a Lua block on and off.
fn strip_single_line_comments(source: &str) -> String {
    let source = source.replace('\r', "");
    let mut out = String::with_capacity(source.len());
    for line in source.split('\n') {
        let trimmed = line.trim();
        if !trimmed.starts_with("--")
            || trimmed.starts_with("--[[")
            || trimmed.starts_with("--]]")
        {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Extract required module names in declaration order, duplicates kept.
pub fn scan_modules(source: &str) -> Vec<String> {
    let stripped = strip_single_line_comments(source);
    // Line numbers are not preserved past this point.
    let stripped = BLOCK_COMMENT.replace_all(&stripped, "");

    let mut modules = Vec::new();
    for line in stripped.split('\n') {
        let line = line.trim();
        if let Some(captures) = REQUIRE_QUOTED
            .captures(line)
            .or_else(|| REQUIRE_CALL.captures(line))
        {
            modules.push(captures[1].to_string());
        }
    }
    modules
}

/// Compiled path for a dotted module name: `a.b.c` → `/a/b/c.luac`.
pub fn module_resource(module: &str) -> String {
    format!("/{}.luac", module.replace('.', "/"))
}

/// Compile a `.script` / `.lua` source into its binary module form.
pub fn compile_script(source: &[u8]) -> PipelineResult<Vec<u8>> {
    let text = std::str::from_utf8(source).map_err(|e| PipelineError::Parse(e.to_string()))?;
    let modules = scan_modules(text);
    let resources = modules.iter().map(|m| module_resource(m)).collect();
    codec::encode_binary(&LuaModule {
        script: text.to_string(),
        r#type: LuaModuleType::Text,
        modules,
        resources,
    })
}
