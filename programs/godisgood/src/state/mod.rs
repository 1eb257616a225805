pub mod act;
pub use act::*;

pub mod campaign;
pub use campaign::*;

pub mod events;
pub use events::*;

pub mod receipt;
pub use receipt::*;

pub mod registry;
pub use registry::*;
