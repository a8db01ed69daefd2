mod color;
pub use color::*;

mod error;
pub use error::*;

mod tint;
pub use tint::*;

mod glow;
pub use glow::*;

mod generate;
pub use generate::*;

#[cfg(test)]
mod test;
