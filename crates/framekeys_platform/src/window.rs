use std::fs;
use std::path::Path;
use std::sync::Arc;

use framekeys_core::{HostElement, HostRect};
use serde::Deserialize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            title: "framekeys".to_string(),
            width: 1280,
            height: 720,
            log_filter: "info".to_string(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<PlatformConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: PlatformConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    log::debug!(
        "Loaded config {}: {}x{} '{}'",
        path.display(),
        config.width,
        config.height,
        config.title
    );
    Ok(config)
}

fn validate_config(config: &PlatformConfig) -> Result<(), String> {
    if config.width == 0 || config.height == 0 {
        return Err(format!(
            "Config validation failed: window size {}x{} must be non-zero",
            config.width, config.height
        ));
    }
    Ok(())
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &PlatformConfig,
) -> Result<Arc<Window>, String> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

    let window = event_loop.create_window(attrs).map_err(|e| {
        log::warn!("Window creation failed for '{}': {e}", config.title);
        format!("Failed to create window: {e}")
    })?;
    Ok(Arc::new(window))
}

/// The window's client area as pointer host. winit already reports cursor
/// positions relative to the client area, so the origin is always (0, 0).
pub struct WindowHost {
    window: Arc<Window>,
}

impl WindowHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl HostElement for WindowHost {
    fn bounding_rect(&self) -> HostRect {
        let size = self.window.inner_size();
        HostRect::new(0.0, 0.0, f64::from(size.width), f64::from(size.height))
    }
}
