pub mod gate;
pub mod password;
pub mod sessions;
pub mod token;

pub use gate::{Gate, Identity};
