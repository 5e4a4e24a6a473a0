pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointermove;
pub use viewport::{wire_viewport_handlers, ViewportListeners, ViewportWiring};
