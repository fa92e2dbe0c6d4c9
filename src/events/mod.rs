pub mod keyboard;
pub mod wheel;

pub use keyboard::wire_panel_toggle_h;
pub use wheel::{wire_scroll_down_button, wire_wheel_snap};
