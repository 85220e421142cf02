// Notes → PDF export.
// CPU-bound rendering must run inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod render;
