use crate::error::LoadError;
use camino::Utf8Path;
use pragma_check_domain::ast::{ImportDirective, Node, PragmaDirective};
use pragma_check_domain::model::Artifact;
use serde_json::{Map, Value};

const NODE_TYPE: &str = "nodeType";
const PRAGMA_DIRECTIVE: &str = "PragmaDirective";
const IMPORT_DIRECTIVE: &str = "ImportDirective";

/// Decode a compiler output document.
///
/// Accepts Hardhat build-info (`{ "output": { "sources": ... } }`) and bare
/// solc standard-JSON output (`{ "sources": ... }`). Source order follows the
/// document.
pub fn parse_artifact(path: &Utf8Path, text: &str) -> Result<Artifact, LoadError> {
    let doc: Value = serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let output = doc.get("output").unwrap_or(&doc);
    let sources = output
        .get("sources")
        .and_then(Value::as_object)
        .ok_or_else(|| shape(path, "missing `sources` object"))?;

    let mut artifact = Artifact::new(path.as_str());
    for (source_path, entry) in sources {
        let ast = entry
            .get("ast")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                shape(
                    path,
                    format!("source {source_path} has no `ast`; compile with AST output enabled"),
                )
            })?;
        let root = decode_object(path, source_path, ast)?;
        artifact = artifact.with_source(source_path, root);
    }

    Ok(artifact)
}

fn decode_object(
    path: &Utf8Path,
    source: &str,
    map: &Map<String, Value>,
) -> Result<Node, LoadError> {
    match map.get(NODE_TYPE).and_then(Value::as_str) {
        Some(PRAGMA_DIRECTIVE) => {
            let literals = map
                .get("literals")
                .and_then(Value::as_array)
                .ok_or_else(|| shape(path, format!("{source}: pragma without `literals`")))?;
            Ok(Node::Pragma(PragmaDirective::new(
                literals.iter().filter_map(Value::as_str),
            )))
        }
        Some(IMPORT_DIRECTIVE) => {
            let absolute_path = map
                .get("absolutePath")
                .and_then(Value::as_str)
                .ok_or_else(|| shape(path, format!("{source}: import without `absolutePath`")))?;
            Ok(Node::Import(ImportDirective {
                absolute_path: absolute_path.to_string(),
                file: map.get("file").and_then(Value::as_str).map(str::to_string),
            }))
        }
        _ => decode_children(path, source, map.values()),
    }
}

fn decode_children<'v>(
    path: &Utf8Path,
    source: &str,
    values: impl Iterator<Item = &'v Value>,
) -> Result<Node, LoadError> {
    let mut children = Vec::new();
    for value in values {
        let child = match value {
            Value::Object(map) => decode_object(path, source, map)?,
            Value::Array(items) => decode_children(path, source, items.iter())?,
            _ => continue,
        };
        // Subtrees without directives are dropped so only the skeleton
        // leading to pragmas and imports stays in memory.
        if !matches!(&child, Node::Scope(c) if c.is_empty()) {
            children.push(child);
        }
    }
    Ok(Node::Scope(children))
}

fn shape(path: &Utf8Path, reason: impl Into<String>) -> LoadError {
    LoadError::Shape {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
