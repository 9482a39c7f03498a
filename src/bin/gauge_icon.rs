use anyhow::Context;

fn main() -> anyhow::Result<()> {
    trayglyph::run("gauge", trayglyph::icons::gauge::render)
        .context("failed to generate the gauge tray icon")
}
