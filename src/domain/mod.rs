pub mod prices;
pub mod schedule;
pub mod storage;

pub use prices::*;
pub use schedule::*;
pub use storage::*;
