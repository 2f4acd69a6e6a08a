//! Shared test utilities for the pragma-check workspace.
//!
//! Builds solc-shaped artifacts so adapter, app and CLI tests exercise the
//! same JSON decoding path real build-info files go through.

use serde_json::{Map, Value, json};
use std::path::Path;

/// Split a constraint into the literal tokens solc records for
/// `pragma solidity <constraint>;`, `solidity` included.
///
/// `>=0.8.0 <0.9.0` becomes `["solidity", ">=", "0.8", ".0", "<", "0.9", ".0"]`.
pub fn pragma_literals(constraint: &str) -> Vec<String> {
    let mut out = vec!["solidity".to_string()];
    for word in constraint.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let op_len = rest
                .find(|c: char| !matches!(c, '<' | '>' | '=' | '^' | '~' | '|' | '-'))
                .unwrap_or(rest.len());
            if op_len > 0 {
                out.push(rest[..op_len].to_string());
                rest = &rest[op_len..];
                continue;
            }
            let ver_len = rest
                .find(|c: char| matches!(c, '<' | '>' | '=' | '^' | '~' | '|' | '-'))
                .unwrap_or(rest.len());
            out.extend(version_literals(&rest[..ver_len]));
            rest = &rest[ver_len..];
        }
    }
    out
}

/// `0.8.20` lexes as the number `0.8` followed by the number `.20`.
fn version_literals(version: &str) -> Vec<String> {
    let parts: Vec<&str> = version.split('.').collect();
    match parts.as_slice() {
        [major, minor, rest @ ..] => {
            let mut out = vec![format!("{major}.{minor}")];
            out.extend(rest.iter().map(|p| format!(".{p}")));
            out
        }
        _ => vec![version.to_string()],
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArtifactBuilder {
    sources: Vec<(String, Value)>,
}

impl ArtifactBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source unit. `pragma` of `None` means no version pragma.
    pub fn source(mut self, path: &str, pragma: Option<&str>, imports: &[&str]) -> Self {
        let mut nodes = Vec::new();
        if let Some(constraint) = pragma {
            nodes.push(json!({
                "nodeType": "PragmaDirective",
                "literals": pragma_literals(constraint),
            }));
        }
        for target in imports {
            nodes.push(json!({
                "nodeType": "ImportDirective",
                "absolutePath": target,
                "file": target,
                "symbolAliases": [],
            }));
        }
        nodes.push(json!({
            "nodeType": "ContractDefinition",
            "name": "C",
            "nodes": [],
        }));

        self.sources.push((
            path.to_string(),
            json!({
                "nodeType": "SourceUnit",
                "absolutePath": path,
                "nodes": nodes,
            }),
        ));
        self
    }

    /// Add a source unit with a raw AST root.
    pub fn raw_source(mut self, path: &str, ast: Value) -> Self {
        self.sources.push((path.to_string(), ast));
        self
    }

    /// Hardhat build-info document.
    pub fn build_info(&self) -> Value {
        let mut sources = Map::new();
        for (id, (path, ast)) in self.sources.iter().enumerate() {
            sources.insert(path.clone(), json!({ "id": id, "ast": ast }));
        }
        json!({
            "_format": "hh-sol-build-info-1",
            "solcVersion": "0.8.24",
            "output": { "sources": sources, "contracts": {} },
        })
    }

    /// Write the build-info document to `path`, creating parent directories.
    pub fn write(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create artifact directory");
        }
        let text = serde_json::to_string_pretty(&self.build_info()).expect("serialize artifact");
        std::fs::write(path, text).expect("write artifact");
    }
}
