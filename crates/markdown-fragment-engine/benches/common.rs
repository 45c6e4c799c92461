// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted\n>> Deeper\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize, items_per_level: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let indent = "  ".repeat(level);
        for i in 0..items_per_level {
            let marker = if level % 2 == 0 {
                "-".to_string()
            } else {
                format!("{}.", i + 1)
            };
            content.push_str(&format!("{indent}{marker} item {i} at level {level}\n"));
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    let mut content = String::new();
    for level in 1..=depth {
        content.push_str(&format!("{} quote at level {level}\n", ">".repeat(level)));
    }
    for level in (1..depth).rev() {
        content.push_str(&format!("{} back at level {level}\n", ">".repeat(level)));
    }
    content
}
