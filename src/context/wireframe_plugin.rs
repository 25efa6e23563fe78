/// Owns the wireframe display flag
///
/// Only the boolean lives here. Pushing it onto the scene's materials is the
/// frame loop's job, driven by the one-shot edge from [`take_toggled`](Self::take_toggled).
#[derive(Debug, Default)]
pub struct WireframePlugin {
    enabled: bool,
    pending: bool,
}

impl WireframePlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag and returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.pending = true;
        log::info!("Wireframe {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the current state once after any number of toggles, then `None`
    pub fn take_toggled(&mut self) -> Option<bool> {
        std::mem::take(&mut self.pending).then_some(self.enabled)
    }
}
