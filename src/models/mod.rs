mod conversion;
pub use conversion::*;
