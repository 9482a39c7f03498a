use anyhow::Context;

fn main() -> anyhow::Result<()> {
    trayglyph::run("bars", trayglyph::icons::bars::render)
        .context("failed to generate the bars tray icon")
}
