pub mod ballot;
pub use ballot::*;

pub mod events;
pub use events::*;

pub mod proposal;
pub use proposal::*;

pub mod registry;
pub use registry::*;
