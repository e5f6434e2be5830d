pub mod events;
pub mod window;

pub use events::{button_index, key_name, translate_window_event};
pub use window::{create_window, load_config_from_path, PlatformConfig, WindowHost};
