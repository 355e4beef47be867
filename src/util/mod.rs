pub mod mime;
pub mod serialize;
