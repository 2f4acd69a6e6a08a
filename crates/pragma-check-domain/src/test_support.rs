use crate::ast::{ImportDirective, Node, PragmaDirective};
use crate::policy::{DuplicatePragma, EffectiveConfig};
use crate::skip::SkipSet;

pub fn config(skip: &[&str]) -> EffectiveConfig {
    config_with(skip, DuplicatePragma::KeepFirst)
}

pub fn config_with(skip: &[&str], duplicate_pragma: DuplicatePragma) -> EffectiveConfig {
    EffectiveConfig {
        skip: SkipSet::new(skip.iter().copied()).expect("test skip patterns are valid"),
        duplicate_pragma,
    }
}

pub fn unit(children: Vec<Node>) -> Node {
    Node::Scope(children)
}

pub fn pragma(literals: &[&str]) -> Node {
    Node::Pragma(PragmaDirective::new(literals.iter().copied()))
}

pub fn import(path: &str) -> Node {
    Node::Import(ImportDirective {
        absolute_path: path.to_string(),
        file: None,
    })
}

/// A source unit declaring `pragma solidity <constraint>;` followed by imports.
pub fn sol(constraint: &str, imports: &[&str]) -> Node {
    let mut children = vec![pragma(&["solidity", constraint])];
    children.extend(imports.iter().map(|p| import(p)));
    unit(children)
}

/// A source unit with imports but no version pragma.
pub fn unversioned(imports: &[&str]) -> Node {
    unit(imports.iter().map(|p| import(p)).collect())
}
