// src/health/mod.rs
mod prober;
mod render;
mod status;

pub use prober::{HttpProber, ProbeError, Prober};
pub use render::render_payload;
pub use status::{HealthStatus, ProbeDetail, ProbeResult};
