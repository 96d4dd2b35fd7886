mod app_state;
mod favorites;
mod progress;
mod screen_state;
mod tabs;

// Re-export all types from submodules
pub use app_state::*;
pub use favorites::*;
pub use progress::*;
pub use screen_state::*;
pub use tabs::*;
