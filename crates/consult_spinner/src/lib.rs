mod spinner;

pub use spinner::*;
