pub mod config;
pub use self::config::Config;

pub mod data;
pub use self::data::Data;

pub mod logging;
pub mod poise;
pub mod shutdown;
