use chunk_diff::{ChunkKind, Differences, LineDifferences, StringDifferences};
use rayon::prelude::*;

#[test]
fn test_single_element_windows() {
    let diff = Differences::new(&["a"], &["b"]);
    assert_eq!(diff.len(), 2);
    assert_eq!(diff[0].kind(), ChunkKind::Deleted);
    assert_eq!(diff[1].kind(), ChunkKind::Inserted);
    assert!(diff.iter().all(|c| !c.are_equal()));

    let diff = Differences::new(&["a"], &["a"]);
    assert_eq!(diff.len(), 1);
    assert!(diff.are_equal());
}

#[test]
fn test_duplicates() {
    let a = ["a", "a", "b"];
    let b = ["a", "b", "b"];
    let stats = Differences::new(&a, &b).stats();

    assert_eq!(stats.equal, 2);
    assert_eq!(stats.edit_distance(), 2);
}

#[test]
fn test_alternating_sequences() {
    // Adversarial for recursive implementations: many small middle snakes
    let a: Vec<u8> = (0..2_000).map(|i| (i % 2) as u8).collect();
    let b: Vec<u8> = (0..2_000).map(|i| ((i / 3) % 2) as u8).collect();

    let diff = Differences::new(&a, &b);

    let rebuilt: Vec<u8> = diff
        .iter()
        .filter_map(|c| c.a())
        .flat_map(|w| w.iter().copied())
        .collect();
    assert_eq!(rebuilt, a);
    assert_eq!(diff.stats().equal * 2 + diff.stats().edit_distance(), 4_000);
}

#[test]
fn test_very_large_text() {
    let mut old = String::new();
    let mut new = String::new();

    for i in 0..1000 {
        old.push_str(&format!("Line {} of old text\n", i));

        // Make every 10th line different
        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let lines = LineDifferences::new(&old, &new);
    let stats = lines.stats();
    assert_eq!(stats.deleted, 100);
    assert_eq!(stats.inserted, 100);
    assert_eq!(stats.equal, 900);
    let count = |kind| lines.iter().filter(|c| c.kind() == kind).count();
    assert_eq!(count(ChunkKind::Deleted), 100);
    assert_eq!(count(ChunkKind::Inserted), 100);
    assert_eq!(count(ChunkKind::Equal), 100);

    // Character granularity over the first part of the text (ASCII only)
    let chars = StringDifferences::new(&old[..4000], &new[..4000]);
    let rebuilt: String = chars.iter().filter_map(|c| c.b()).map(|t| t.text).collect();
    assert_eq!(rebuilt, &new[..4000]);
}

#[test]
fn test_completely_different_large() {
    let a = vec![1u32; 3000];
    let b = vec![2u32; 2000];

    let diff = Differences::new(&a, &b);

    assert_eq!(diff.len(), 2);
    assert_eq!(diff[0].kind(), ChunkKind::Deleted);
    assert_eq!(diff[0].a().unwrap().len(), 3000);
    assert_eq!(diff[1].kind(), ChunkKind::Inserted);
    assert_eq!(diff[1].b().unwrap().len(), 2000);
}

#[test]
fn test_results_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Differences<'static, String>>();
    assert_send_sync::<StringDifferences<'static>>();
    assert_send_sync::<LineDifferences<'static>>();
}

#[test]
fn test_concurrent_independent_diffs() {
    let inputs: Vec<(String, String)> = (0..64)
        .map(|i| {
            let a = format!("{}-{}-{}", "abc".repeat(i % 7), i, "xyz".repeat(i % 5));
            let b = format!("{}-{}-{}", "abd".repeat(i % 5), i * 3, "xyz".repeat(i % 7));
            (a, b)
        })
        .collect();

    let sequential: Vec<_> = inputs
        .iter()
        .map(|(a, b)| StringDifferences::new(a, b).stats())
        .collect();
    let parallel: Vec<_> = inputs
        .par_iter()
        .map(|(a, b)| StringDifferences::new(a, b).stats())
        .collect();

    assert_eq!(sequential, parallel);

    // One result read from many threads
    let (a, b) = &inputs[42];
    let shared = StringDifferences::new(a, b);
    let counts: Vec<usize> = (0..16).into_par_iter().map(|_| shared.len()).collect();
    assert!(counts.iter().all(|&n| n == shared.len()));
}
