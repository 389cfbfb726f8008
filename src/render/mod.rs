//! Built-in renderer implementations

pub mod plain;
pub mod term;

pub use plain::PlainRender;
pub use term::TermRender;
