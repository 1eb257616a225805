pub mod initialize;
pub use initialize::*;

pub mod create_campaign;
pub use create_campaign::*;

pub mod add_act;
pub use add_act::*;

pub mod vote;
pub use vote::*;

pub mod get_leading;
pub use get_leading::*;

pub mod close_campaign;
pub use close_campaign::*;

pub mod select_winner;
pub use select_winner::*;

pub mod get_winner;
pub use get_winner::*;
