pub mod initialize;
pub use initialize::*;

pub mod create_proposal;
pub use create_proposal::*;

pub mod vote;
pub use vote::*;

pub mod close;
pub use close::*;

pub mod get_proposal;
pub use get_proposal::*;
