use anyhow::Context;

fn main() -> anyhow::Result<()> {
    trayglyph::run("ring", trayglyph::icons::ring::render)
        .context("failed to generate the ring tray icon")
}
