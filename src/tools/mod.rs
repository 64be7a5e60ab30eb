pub mod list_navigation;
pub mod replay;
pub mod search;

pub use list_navigation::*;
pub use replay::*;
pub use search::*;
