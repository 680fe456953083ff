use super::*;
use std::vec;
use std::vec::Vec;

fn build(l2: usize) -> Vec<u32> {
    let mut bitrev = vec![0; table_len(l2)];
    precompute_bitrev(&mut bitrev, l2);
    bitrev
}

#[test]
fn test_table_len() {
    assert_eq!(table_len(0), 0);
    assert_eq!(table_len(1), 0);
    assert_eq!(table_len(2), 1);
    assert_eq!(table_len(3), 2);
    assert_eq!(table_len(10), 256);
}

#[test]
fn test_precompute_bitrev_small() {
    assert_eq!(build(2), vec![0]);
    // 0 (000) -> 0, 4 (100) -> 1 (001)
    assert_eq!(build(3), vec![0, 1]);
    // 0, 4, 8, 12 over 4 bits -> 0, 2, 1, 3
    assert_eq!(build(4), vec![0, 2, 1, 3]);
}

#[test]
fn test_groups_cover_every_index_once() {
    for l2 in 2..=12 {
        let n = 1usize << l2;
        let bitrev = build(l2);
        let mut seen = vec![false; n];
        for group in 0..bitrev.len() {
            for (lane, idx) in group_indices(&bitrev, group, n >> 2).into_iter().enumerate() {
                let coef = (group << 2) + lane;
                assert_eq!(idx, (coef.reverse_bits() >> (usize::BITS as usize - l2)));
                assert!(!seen[idx], "index {idx} visited twice for l2 = {l2}");
                seen[idx] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }
}

#[test]
fn test_rebuild_is_identical() {
    assert_eq!(build(11), build(11));
}
