pub mod game_log;
pub mod pick;
pub mod stat_key;

pub use game_log::*;
pub use pick::*;
pub use stat_key::*;
