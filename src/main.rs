//! Text Page Builder CLI (for testing purposes only)
//! The main interface is through WASM bindings.

use text_page_builder::{MemoryStore, PageConfig, PageEditor};

fn main() {
    println!("Text Page Builder");
    println!("=================");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. Call `mount(\"app\")` from the page that loads the module");
    println!();

    // Preview stdin the way the browser preview would show it
    let input = std::io::read_to_string(std::io::stdin()).unwrap_or_default();
    let mut editor = PageEditor::load(MemoryStore::new(), PageConfig::default());
    editor.set_content(input);
    let stats = editor.stats();
    println!("Lines: {} \u{2022} Characters: {}", stats.lines, stats.chars);
    println!("{}", editor.view().to_json());
}
