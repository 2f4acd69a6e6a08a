//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the lowest satisfying version of a range
//! - caret and tilde bounds
//! - determinism and self-consistency of the engine

use crate::constraint::VersionReq;
use crate::engine::check_artifact;
use crate::model::Artifact;
use crate::test_support::{config, sol};
use proptest::prelude::*;
use semver::Version;

// ============================================================================
// Strategies
// ============================================================================

fn arb_triple() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..3, 0u64..12, 0u64..30)
}

/// Constraint strings in the shapes pragmas actually use.
fn arb_constraint() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_triple().prop_map(|(a, b, c)| format!("^{a}.{b}.{c}")),
        arb_triple().prop_map(|(a, b, c)| format!("~{a}.{b}.{c}")),
        arb_triple().prop_map(|(a, b, c)| format!(">={a}.{b}.{c}")),
        arb_triple().prop_map(|(a, b, c)| format!(">{a}.{b}.{c}")),
        arb_triple().prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        (arb_triple(), 1u64..3).prop_map(|((a, b, c), span)| format!(
            ">={a}.{b}.{c} <{a}.{}.0",
            b + span
        )),
        (arb_triple(), 1u64..3).prop_map(|((a, b, c), span)| format!(
            ">={a}.{b}.{c}<{a}.{}.0",
            b + span
        )),
        (0u64..3, 0u64..12).prop_map(|(a, b)| format!("^{a}.{b}")),
        (arb_triple(), arb_triple()).prop_map(|((a, b, c), (d, e, f))| format!(
            "^{a}.{b}.{c} || ^{d}.{e}.{f}"
        )),
    ]
}

// ============================================================================
// Constraint algebra
// ============================================================================

proptest! {
    #[test]
    fn min_version_satisfies_its_own_range(c in arb_constraint()) {
        let req = VersionReq::parse(&c).expect("generated constraints parse");
        if let Some(min) = req.min_version() {
            prop_assert!(req.matches(&min), "{} does not accept its minimum {}", c, min);
        }
    }

    #[test]
    fn nothing_below_min_version_matches((c, probe) in (arb_constraint(), arb_triple())) {
        let req = VersionReq::parse(&c).expect("generated constraints parse");
        let probe = Version::new(probe.0, probe.1, probe.2);
        if let Some(min) = req.min_version()
            && probe < min
        {
            prop_assert!(!req.matches(&probe), "{} accepts {} below minimum {}", c, probe, min);
        }
    }

    #[test]
    fn caret_accepts_its_floor_and_rejects_next_major((a, b, c) in (1u64..5, 0u64..12, 0u64..30)) {
        let req = VersionReq::parse(&format!("^{a}.{b}.{c}")).expect("parse");
        prop_assert!(req.matches(&Version::new(a, b, c)));
        prop_assert!(req.matches(&Version::new(a, b + 1, 0)));
        prop_assert!(!req.matches(&Version::new(a + 1, 0, 0)));
    }

    #[test]
    fn tilde_rejects_next_minor((a, b, c) in arb_triple()) {
        let req = VersionReq::parse(&format!("~{a}.{b}.{c}")).expect("parse");
        prop_assert!(req.matches(&Version::new(a, b, c + 1)));
        prop_assert!(!req.matches(&Version::new(a, b + 1, 0)));
    }
}

// ============================================================================
// Engine
// ============================================================================

proptest! {
    #[test]
    fn uniform_constraint_graph_has_no_violations(
        c in arb_constraint(),
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..20),
    ) {
        prop_assume!(VersionReq::parse(&c).expect("parse").min_version().is_some());

        let names: Vec<String> = (0..6).map(|i| format!("contracts/F{i}.sol")).collect();
        let mut artifact = Artifact::new("uniform.json");
        for (i, name) in names.iter().enumerate() {
            let imports: Vec<&str> = edges
                .iter()
                .filter(|(from, _)| *from == i)
                .map(|(_, to)| names[*to].as_str())
                .collect();
            artifact = artifact.with_source(name, sol(&c, &imports));
        }

        let summary = check_artifact(&artifact, &config(&[])).expect("check");
        prop_assert!(summary.violations.is_empty());
        prop_assert_eq!(summary.edges_checked as usize, edges.len());
    }

    #[test]
    fn engine_is_deterministic(
        constraints in prop::collection::vec(arb_constraint(), 2..6),
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..20),
    ) {
        let n = constraints.len();
        let names: Vec<String> = (0..n).map(|i| format!("F{i}.sol")).collect();
        let mut artifact = Artifact::new("random.json");
        for (i, name) in names.iter().enumerate() {
            let imports: Vec<&str> = edges
                .iter()
                .filter(|(from, to)| *from == i && *to < n)
                .map(|(_, to)| names[*to].as_str())
                .collect();
            artifact = artifact.with_source(name, sol(&constraints[i], &imports));
        }

        let cfg = config(&[]);
        let first = check_artifact(&artifact, &cfg).expect("check");
        let second = check_artifact(&artifact, &cfg).expect("check");
        prop_assert_eq!(first, second);
    }
}
