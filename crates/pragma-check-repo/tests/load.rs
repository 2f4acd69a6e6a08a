use camino::{Utf8Path, Utf8PathBuf};
use pragma_check_domain::ast::{self, ImportDirective, PragmaDirective, Visitor};
use pragma_check_repo::{LoadError, load_artifacts};
use pragma_check_test_util::ArtifactBuilder;
use tempfile::TempDir;

fn root(tmp: &TempDir) -> &Utf8Path {
    Utf8Path::from_path(tmp.path()).expect("utf8 tempdir")
}

#[derive(Default)]
struct Events(Vec<String>);

impl Visitor for Events {
    fn visit_pragma(&mut self, pragma: &PragmaDirective) {
        if let Some(c) = pragma.language_constraint() {
            self.0.push(format!("pragma {c}"));
        }
    }

    fn visit_import(&mut self, import: &ImportDirective) {
        self.0.push(format!("import {}", import.absolute_path));
    }
}

#[test]
fn build_info_round_trips_into_typed_ast() {
    let tmp = TempDir::new().expect("tempdir");
    ArtifactBuilder::new()
        .source("contracts/A.sol", Some(">=0.8.0 <0.9.0"), &["contracts/B.sol"])
        .source("contracts/B.sol", Some("^0.8.20"), &[])
        .source("contracts/I.sol", None, &[])
        .write(&tmp.path().join("artifacts/build-info/one.json"));

    let artifacts = load_artifacts(
        root(&tmp),
        &[Utf8PathBuf::from("artifacts/build-info/one.json")],
    )
    .expect("load");

    assert_eq!(artifacts.len(), 1);
    let artifact = &artifacts[0];
    assert_eq!(artifact.label, "artifacts/build-info/one.json");

    let paths: Vec<&str> = artifact.sources.iter().map(|u| u.path.as_str()).collect();
    assert_eq!(paths, vec!["contracts/A.sol", "contracts/B.sol", "contracts/I.sol"]);

    let mut events = Events::default();
    ast::walk(&artifact.sources[0].ast, &mut events);
    assert_eq!(
        events.0,
        vec!["pragma >=0.8.0<0.9.0", "import contracts/B.sol"]
    );
}

#[test]
fn directory_inputs_expand_in_sorted_order() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().join("build-info");
    ArtifactBuilder::new()
        .source("B.sol", Some("^0.8.0"), &[])
        .write(&dir.join("b.json"));
    ArtifactBuilder::new()
        .source("A.sol", Some("^0.8.0"), &[])
        .write(&dir.join("a.json"));
    std::fs::write(dir.join("notes.txt"), "ignored").expect("write");

    let artifacts = load_artifacts(root(&tmp), &[Utf8PathBuf::from("build-info")]).expect("load");
    let labels: Vec<&str> = artifacts.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["build-info/a.json", "build-info/b.json"]);
}

#[test]
fn first_failing_input_is_reported() {
    let tmp = TempDir::new().expect("tempdir");
    ArtifactBuilder::new()
        .source("A.sol", Some("^0.8.0"), &[])
        .write(&tmp.path().join("good.json"));
    std::fs::write(tmp.path().join("broken.json"), "{ not json").expect("write");

    let err = load_artifacts(
        root(&tmp),
        &[
            Utf8PathBuf::from("good.json"),
            Utf8PathBuf::from("missing.json"),
            Utf8PathBuf::from("broken.json"),
        ],
    )
    .expect_err("missing artifact");

    assert!(matches!(err, LoadError::Read { .. }));
    assert_eq!(err.path().as_str(), "missing.json");
}
