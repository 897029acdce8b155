use anyhow::Result;
use chunk_diff::{ChunkKind, LineDifferences, LineTerminators};

fn print_diff(diff: &LineDifferences<'_>) {
    for chunk in diff {
        if chunk.kind() == ChunkKind::Equal {
            if let Some(run) = chunk.a() {
                for line in run.text.lines() {
                    println!(" {}", line);
                }
            }
            continue;
        }
        if let Some(run) = chunk.a() {
            for line in run.text.lines() {
                println!("\x1b[31m-{}\x1b[0m", line);
            }
        }
        if let Some(run) = chunk.b() {
            for line in run.text.lines() {
                println!("\x1b[32m+{}\x1b[0m", line);
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let file1 = r#"fn main() {
    println!("Hello, world!");
}
"#;

    let file2 = r#"fn main() {
    // Add a greeting with name
    let name = "Rust";
    println!("Hello, {}!", name);
}
"#;

    println!("=== Line diff ===");
    let diff = LineDifferences::new(file1, file2);
    print_diff(&diff);

    let stats = diff.stats();
    println!("\nDiff statistics:");
    println!("  Total chunks: {}", stats.chunks);
    println!("  Added lines: {}", stats.inserted);
    println!("  Deleted lines: {}", stats.deleted);
    println!("  Unchanged lines: {}", stats.equal);

    // Mixed line endings
    let unix_text = "Line 1\nLine 2\nLine 3\n";
    let windows_text = "Line 1\r\nLine 2\r\nLine X\r\n";

    println!("\n=== Terminators stripped (default) ===");
    print_diff(&LineDifferences::new(unix_text, windows_text));

    println!("\n=== Terminators retained ===");
    let retained = LineDifferences::configure()
        .terminators(LineTerminators::Retain)
        .diff(unix_text, windows_text);
    print_diff(&retained);

    println!("\n=== Ignoring whitespace and case ===");
    let text1 = "function calculateSum(a, b) {\n    return a+b;\n}";
    let text2 = "Function  calculateSum(a,b){\n  return a + b;\n}";
    let relaxed = LineDifferences::configure()
        .ignore_whitespace(true)
        .ignore_case(true)
        .diff(text1, text2);
    println!("  equal: {}", relaxed.are_equal());

    Ok(())
}
