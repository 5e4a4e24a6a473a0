pub mod composer;
pub mod constants;
pub mod error;
pub mod layout;
pub mod pointer;
pub mod scene;
pub mod spring;
pub mod viewport;

pub use composer::*;
pub use error::{Result, SceneError};
pub use layout::*;
pub use pointer::*;
pub use scene::*;
pub use spring::*;
pub use viewport::*;
