use chunk_diff::{CharComparer, ChunkKind, StringDifferences};
use insta::assert_snapshot;

/// Render chunks as `[=same][-old][+new]` so alignments read at a glance
fn render(diff: &StringDifferences<'_>) -> String {
    let mut out = String::new();
    for chunk in diff {
        out.push('[');
        match chunk.kind() {
            ChunkKind::Equal => {
                out.push('=');
                out.push_str(chunk.a().map_or("", |t| t.text));
            }
            _ => {
                if let Some(a) = chunk.a() {
                    out.push('-');
                    out.push_str(a.text);
                }
                if let Some(b) = chunk.b() {
                    out.push('+');
                    out.push_str(b.text);
                }
            }
        }
        out.push(']');
    }
    out
}

fn rebuild(diff: &StringDifferences<'_>) -> (String, String) {
    let a = diff.iter().filter_map(|c| c.a()).map(|t| t.text).collect();
    let b = diff.iter().filter_map(|c| c.b()).map(|t| t.text).collect();
    (a, b)
}

#[test]
fn test_word_change() {
    let diff = StringDifferences::new("The quick brown fox", "The quick red fox");
    assert_snapshot!(render(&diff), @"[=The quick ][-b][=r][-own][+ed][= fox]");
}

#[test]
fn test_ignore_case() {
    let diff = StringDifferences::configure()
        .comparer(CharComparer::IgnoreCase)
        .diff("Hello World", "hello world!");
    assert_snapshot!(render(&diff), @"[=Hello World][+!]");

    let diff = StringDifferences::new("Hello World", "hello world!");
    assert_snapshot!(render(&diff), @"[-H][+h][=ello ][-W][+w][=orld][+!]");
}

#[test]
fn test_custom_comparer() {
    // Digits are interchangeable
    let diff = StringDifferences::with_comparer("v1.2", "v3.4", |a: &char, b: &char| {
        a == b || (a.is_ascii_digit() && b.is_ascii_digit())
    });

    assert!(diff.are_equal());
    assert_eq!(diff.len(), 1);
    assert_eq!(diff[0].b().unwrap().text, "v3.4");
}

#[test]
fn test_empty_strings() {
    let diff = StringDifferences::new("", "");
    assert!(diff.is_empty());
    assert!(diff.are_equal());

    let diff = StringDifferences::new("", "abc");
    assert_eq!(diff.len(), 1);
    assert_eq!(diff[0].kind(), ChunkKind::Inserted);
    assert_eq!(diff[0].b().unwrap().text, "abc");
    assert!(diff[0].a().is_none());
}

#[test]
fn test_unicode_offsets() {
    let a = "naïve café 🚀";
    let b = "naive cafe 🚀!";
    let diff = StringDifferences::new(a, b);

    assert_snapshot!(render(&diff), @"[=na][-ï][+i][=ve caf][-é][+e][= 🚀][+!]");

    let deleted = diff[1].a().unwrap();
    assert_eq!((deleted.offset, deleted.len), (2, 1));
    let inserted = diff[2].b().unwrap();
    assert_eq!((inserted.offset, inserted.len), (2, 1));
    let tail = diff[6].a().unwrap();
    assert_eq!(tail.offset, 10);
    assert_eq!(tail.text, " 🚀");

    let (rebuilt_a, rebuilt_b) = rebuild(&diff);
    assert_eq!(rebuilt_a, a);
    assert_eq!(rebuilt_b, b);
}

#[test]
fn test_stats_count_characters() {
    let diff = StringDifferences::new("kitten", "sitting");
    let stats = diff.stats();

    assert_eq!(stats.equal, 4);
    assert_eq!(stats.edit_distance(), 5);
    assert_eq!(diff.a(), "kitten");
    assert_eq!(diff.b(), "sitting");
}
