//! UI Components

pub mod chat;
pub mod comets;
pub mod ships;
pub mod starfield;
pub mod theme_toggle;

pub use chat::ChatWidget;
pub use comets::CometLayer;
pub use ships::ShipLayer;
pub use starfield::Starfield;
pub use theme_toggle::ThemeToggle;
