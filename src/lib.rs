// BOM Dashboard Library Entry Point
// This file exposes all modules so they can be imported by main.rs
// and tested independently.

pub mod error;
pub mod server;
pub mod settings;

// Pure logic modules (no sockets, no filesystem)
pub mod modules;

pub use error::HostError;
pub use modules::page::{dashboard, Element, Layout, Page, PageConfig};
pub use modules::render::to_html;
pub use server::PageServer;
pub use settings::Settings;
