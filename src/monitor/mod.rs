// src/monitor/mod.rs
mod controller;
mod timer;

pub use controller::{Controller, Transition};
pub use timer::{IntervalTimer, Timer};
