pub mod status;
pub mod product;
pub mod order;

pub use status::*;
pub use product::*;
pub use order::*;
