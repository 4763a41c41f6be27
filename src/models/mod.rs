pub mod usuario;

pub use usuario::*;
