//! Opens the viewer with the default configuration.
//!
//! Keys: arrows move the compound object up/down/left/right and D/C move it
//! backwards/forwards. Q/W, A/S and Z/X bend its three segments. 1/2/3
//! switch cameras, 4 toggles wireframe and Escape quits.
//! Log verbosity follows `RUST_LOG` (default `info`).

use compound_viewer::ViewerConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    compound_viewer::run(ViewerConfig::default())?;
    Ok(())
}
