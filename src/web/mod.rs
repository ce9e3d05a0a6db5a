// Web layer: htmx-driven HTML handlers
pub mod handlers;
