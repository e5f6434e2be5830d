pub mod attach;
pub mod dispatch;
pub mod host;
pub mod input;
pub mod names;

pub use attach::AttachedInput;
pub use dispatch::{EventDispatcher, EventKind, InputEvent, Subscription};
pub use host::{HostElement, HostRect};
pub use input::{InputSnapshot, InputState, RawCode};
pub use names::{button_identifier, key_identifier, Key, MouseButton};
