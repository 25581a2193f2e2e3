pub mod category;
pub mod int_or_string;
pub mod question;

pub use category::*;
pub use question::*;
