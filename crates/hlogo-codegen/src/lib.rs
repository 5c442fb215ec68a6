mod boolean;
mod compiler;
mod range;

pub use boolean::translate_bool;
pub use compiler::Compiler;
pub use range::translate_range;
