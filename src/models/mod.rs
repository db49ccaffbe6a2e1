pub mod bulk;
pub mod card;
pub mod raw;

pub use bulk::*;
pub use card::*;
pub use raw::*;
