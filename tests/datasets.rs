// Integration tests for the hiragana pool invariants.
// Native-friendly: no wasm/browser APIs involved.

use std::collections::HashSet;

#[test]
fn pool_is_nonempty() {
    assert!(!kana_zoom::HIRAGANA.is_empty());
}

#[test]
fn pool_entries_are_unique() {
    let mut seen = HashSet::new();
    for &c in kana_zoom::HIRAGANA {
        assert!(seen.insert(c), "duplicate kana '{}' in HIRAGANA", c);
    }
}

#[test]
fn pool_is_base_hiragana_only() {
    for &c in kana_zoom::HIRAGANA {
        assert!(
            ('ぁ'..='ん').contains(&c),
            "'{}' is outside the hiragana block",
            c
        );
    }
    // No voiced, semi-voiced, or small forms in the quiz pool.
    for bad in ['が', 'ざ', 'だ', 'ば', 'ぱ', 'ゃ', 'ゅ', 'ょ', 'っ', 'ぁ'] {
        assert!(
            !kana_zoom::HIRAGANA.contains(&bad),
            "'{}' should not be in the pool",
            bad
        );
    }
}

#[test]
fn pool_covers_every_gojuon_row() {
    for c in ['あ', 'か', 'さ', 'た', 'な', 'は', 'ま', 'や', 'ら', 'わ', 'を', 'ん'] {
        assert!(
            kana_zoom::HIRAGANA.contains(&c),
            "'{}' missing from the pool",
            c
        );
    }
}
