pub mod filter;
pub use filter::{ValueType, ValueTypeParseError};

pub mod mask;
pub use mask::{MaskErrors, MaskFormatter, PLACEHOLDER};

pub mod terminal;
pub use terminal::Terminal;
