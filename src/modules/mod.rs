// Pure logic modules - no sockets or filesystem access.
pub mod page;
pub mod render;
pub mod routes;     // Method/path -> reply mapping
