mod field_error;
mod product;

pub use field_error::*;
pub use product::*;
