// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_assistant_reply(size: usize) -> String {
    let base = "## Answer\n\nHere is how `parse` works with **owned** values.\nIt never fails.\n\n- First step\n- Second step with `code`\n\n| name | value |\n|------|------:|\n| a | 1 |\n| b | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(size: usize) -> String {
    "text `code` more **bold** and a stray * or ` marker ".repeat(size)
}
