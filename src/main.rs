//! Renders the built-in architecture diagram and writes it next to the docs.

use skema::render::defaults;

fn main() -> miette::Result<()> {
    skema::render_and_export(&skema::architecture::canvas(), defaults::OUTPUT_PATH)?;
    println!("✅ Architecture diagram saved as {}", defaults::OUTPUT_PATH);
    Ok(())
}
