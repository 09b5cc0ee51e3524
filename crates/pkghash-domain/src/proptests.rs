//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Fingerprint independence from discovery order
//! - Sensitivity to content changes
//! - Gate decisions against stored records

use crate::fingerprint::{combine_digests, digest_bytes, fingerprint_for};
use crate::gate::{GateState, evaluate};
use crate::model::{FileDigest, InputKind, ManifestEntry};
use pkghash_types::{Fingerprint, RepoPath};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// File contents: small arbitrary byte strings (including empty).
fn arb_contents() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

fn arb_kind() -> impl Strategy<Value = InputKind> {
    prop_oneof![
        Just(InputKind::Manifest),
        Just(InputKind::Lockfile),
        Just(InputKind::Patch),
    ]
}

/// A set of inputs with unique paths.
fn arb_files() -> impl Strategy<Value = Vec<FileDigest>> {
    prop::collection::vec((arb_kind(), arb_contents()), 0..12).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (kind, bytes))| FileDigest {
                entry: ManifestEntry {
                    kind,
                    path: RepoPath::new(format!("input-{i}")),
                },
                digest: digest_bytes(&bytes),
            })
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn fingerprint_ignores_discovery_order(
        (files, shuffled) in arb_files().prop_flat_map(|files| {
            let shuffled = Just(files.clone()).prop_shuffle();
            (Just(files), shuffled)
        })
    ) {
        prop_assert_eq!(fingerprint_for(&files), fingerprint_for(&shuffled));
    }

    #[test]
    fn fingerprint_is_always_well_formed(files in arb_files()) {
        prop_assert!(fingerprint_for(&files).is_well_formed());
    }

    #[test]
    fn changing_one_input_changes_fingerprint(
        base in prop::collection::vec(arb_contents(), 1..8),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let digests: Vec<String> = base.iter().map(|b| digest_bytes(b)).collect();

        let mut mutated = base.clone();
        let i = index.index(mutated.len());
        if mutated[i].is_empty() {
            mutated[i].push(flip);
        } else {
            mutated[i][0] ^= flip;
        }
        let mutated_digests: Vec<String> = mutated.iter().map(|b| digest_bytes(b)).collect();

        prop_assert_ne!(combine_digests(&digests), combine_digests(&mutated_digests));
    }

    #[test]
    fn adding_an_input_changes_fingerprint(
        base in prop::collection::vec(arb_contents(), 0..8),
        extra in arb_contents(),
    ) {
        let digests: Vec<String> = base.iter().map(|b| digest_bytes(b)).collect();
        let mut more = digests.clone();
        more.push(digest_bytes(&extra));

        prop_assert_ne!(combine_digests(&digests), combine_digests(&more));
    }

    #[test]
    fn stored_current_fingerprint_is_up_to_date(
        files in arb_files(),
        padding in "[ \t\r\n]{0,3}",
    ) {
        let fp = fingerprint_for(&files);
        let stored = format!("{padding}{}{padding}", fp.as_str());
        prop_assert_eq!(evaluate(Some(&stored), &fp), GateState::UpToDate);
    }

    #[test]
    fn any_other_record_needs_install(
        files in arb_files(),
        stored in "[0-9a-f]{0,64}",
    ) {
        let fp = fingerprint_for(&files);
        prop_assume!(stored != fp.as_str());
        prop_assert!(evaluate(Some(&stored), &fp).needs_install());
    }
}

#[test]
fn missing_record_always_needs_install() {
    let fp = Fingerprint::from_hex(digest_bytes(b""));
    assert!(evaluate(None, &fp).needs_install());
}
