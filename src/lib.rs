pub mod canvas;
pub mod error;
pub mod export;
pub mod geometry;
pub mod icons;
pub mod logging;
pub mod render;

pub use canvas::Canvas;
pub use error::{IconError, IconResult};
pub use export::OutputTarget;

/// Entrypoint shared by the icon binaries: renders one design and writes it
/// to the tray resource path.
pub fn run(name: &str, render: impl FnOnce() -> Canvas) -> IconResult<()> {
    logging::init();
    tracing::info!(icon = name, "generating tray icon");

    let canvas = render();
    let target = OutputTarget::with_default_path();
    if let Err(err) = target.write_png(&canvas) {
        tracing::error!(icon = name, path = %target.path().display(), %err, "export failed");
        return Err(err);
    }
    Ok(())
}
