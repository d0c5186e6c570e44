pub mod keyword;
pub mod insight;

pub use keyword::*;
pub use insight::*;
