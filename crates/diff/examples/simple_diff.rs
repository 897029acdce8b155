use anyhow::Result;
use chunk_diff::{CharComparer, ChunkKind, Differences, StringDifferences};

fn main() -> Result<()> {
    env_logger::init();

    // Two sample texts to compare
    let text1 = "The quick brown fox jumps over the lazy dog";
    let text2 = "The quick red fox jumped over the Lazy dog";

    println!("Character diff:");
    let diff = StringDifferences::new(text1, text2);
    for chunk in &diff {
        match chunk.kind() {
            ChunkKind::Equal => print!("{}", chunk.a().map_or("", |t| t.text)),
            _ => {
                if let Some(a) = chunk.a() {
                    print!("\x1b[31m[-{}]\x1b[0m", a.text);
                }
                if let Some(b) = chunk.b() {
                    print!("\x1b[32m[+{}]\x1b[0m", b.text);
                }
            }
        }
    }
    println!();

    // Print diff statistics
    let stats = diff.stats();
    println!("\nDiff statistics:");
    println!("  Total chunks: {}", stats.chunks);
    println!("  Equal characters: {}", stats.equal);
    println!("  Deleted characters: {}", stats.deleted);
    println!("  Inserted characters: {}", stats.inserted);

    let ignore_case = StringDifferences::configure()
        .comparer(CharComparer::IgnoreCase)
        .diff(text1, text2);
    println!(
        "\nIgnoring case: {} chunks, edit distance {}",
        ignore_case.len(),
        ignore_case.stats().edit_distance()
    );

    // Generic sequences with a window into each side
    let old = [3, 1, 4, 1, 5, 9, 2, 6];
    let new = [1, 4, 2, 5, 9, 6, 5];
    let numbers =
        Differences::with_windows(&old, 1, 6, &new, 0, 6, |a: &i32, b: &i32| a == b)?;

    println!("\nNumber chunks:");
    for chunk in &numbers {
        let span = chunk.span();
        println!(
            "  {:<8} a={:?} b={:?}",
            span.kind.to_string(),
            chunk.a().map(|w| w.as_slice()),
            chunk.b().map(|w| w.as_slice())
        );
    }

    Ok(())
}
