//! Process startup: tracing setup and one-shot configuration loading.

mod startup;
mod tracing_init;

pub use startup::{startup, startup_with};
pub use tracing_init::init_tracing;
