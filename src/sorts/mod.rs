mod selection;

pub use selection::*;
