pub mod consts;
pub mod convert;
pub mod encode;
pub mod engine;
pub mod files;
pub mod loader;
pub mod models;
pub mod state;
pub mod util;
