//! End-to-end layout scenarios for the catalog colors.

use loom_layout::{FALLBACK_BAND, SegmentKind, TOTAL_SEGMENTS, compute_layout};
use loom_style::{Swatch, find_swatch};

fn swatches(names: &[&str]) -> Vec<Swatch> {
    names
        .iter()
        .map(|name| find_swatch(name).cloned().expect("catalog color"))
        .collect()
}

#[test]
fn empty_inputs_give_an_all_fallback_ring() {
    let layout = compute_layout(&[], "");
    assert_eq!(layout.len(), TOTAL_SEGMENTS);
    assert!(layout.iter().all(|seg| seg.color() == Some(FALLBACK_BAND)));
    assert_eq!(layout.spacing(), None);
}

#[test]
fn whitespace_message_counts_as_empty() {
    assert_eq!(compute_layout(&[], "   \t"), compute_layout(&[], ""));
}

#[test]
fn two_colors_alternate_without_a_message() {
    let pattern = swatches(&["Hot Pink", "Sky"]);
    let layout = compute_layout(&pattern, "");
    for seg in &layout {
        let expected = if seg.position % 2 == 0 { "#ff4f9a" } else { "#7ecbff" };
        assert_eq!(seg.kind, SegmentKind::Band { color: expected });
    }
}

#[test]
fn hi_places_beads_at_nine_and_eighteen() {
    let layout = compute_layout(&[], "Hi");
    assert_eq!(layout.spacing(), Some(9));
    assert_eq!(layout.beads().collect::<Vec<_>>(), vec![(9, "H"), (18, "i")]);
    assert_eq!(layout.bands().count(), TOTAL_SEGMENTS - 2);
    assert!(layout.bands().all(|(_, color)| color == FALLBACK_BAND));
}

#[test]
fn twenty_character_message_drops_its_tail() {
    let message = "ABCDEFGHIJKLMNOPQRST";
    let layout = compute_layout(&[], message);
    assert_eq!(layout.spacing(), Some(2));

    let beads: Vec<_> = layout.beads().collect();
    assert_eq!(beads.len(), 13);
    assert_eq!(beads.first(), Some(&(2, "A")));
    assert_eq!(beads.last(), Some(&(26, "M")));

    // Targets 28, 30, ..., 40 fall off the ring.
    assert_eq!(
        layout.dropped_glyphs(),
        &["N", "O", "P", "Q", "R", "S", "T"]
    );
    assert_eq!(layout.placed_glyphs().concat(), "ABCDEFGHIJKLM");
}

#[test]
fn emoji_and_punctuation_become_beads() {
    let pattern = swatches(&["Lilac"]);
    let layout = compute_layout(&pattern, " Ash💕! ");
    assert_eq!(layout.spacing(), Some(4));
    assert_eq!(
        layout.beads().collect::<Vec<_>>(),
        vec![(4, "A"), (8, "s"), (12, "h"), (16, "💕"), (20, "!")]
    );
    assert!(layout.bands().all(|(_, color)| color == "#b39dff"));
}

#[test]
fn pattern_longer_than_ring_uses_its_prefix() {
    let mut pattern = Vec::new();
    for _ in 0..3 {
        pattern.extend(loom_style::PALETTE.iter().cloned());
    }
    assert!(pattern.len() > TOTAL_SEGMENTS);
    let layout = compute_layout(&pattern, "");
    for seg in &layout {
        assert_eq!(seg.color(), Some(pattern[seg.position].value()));
    }
}

#[test]
fn recomputation_is_stable() {
    let pattern = swatches(&["Mint", "Peach", "Midnight"]);
    let a = compute_layout(&pattern, "Ashton");
    let b = compute_layout(&pattern, "Ashton");
    assert_eq!(a, b);
}
