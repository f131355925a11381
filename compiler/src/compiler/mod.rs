mod compiler;
pub(crate) mod constants;
mod expr;
mod rendering;
mod request;

pub use compiler::Compiler;
pub use request::{PrimitiveRequest, ProfileRequest};
