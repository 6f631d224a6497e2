pub mod config;
pub mod enriched;
pub mod record;
pub mod recommend;
