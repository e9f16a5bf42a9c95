//! Screen and input device rotation for convertible laptops.

pub mod backends;
pub mod cli;
pub mod config;
pub mod desktop;
pub mod devices;
pub mod error;
pub mod exec;
pub mod hooks;
pub mod logging;
pub mod orientation;
pub mod rotate;
pub mod vkeyboard;

pub use orientation::Rotation;
