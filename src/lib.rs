pub mod algorithm;
pub mod network;
pub mod report;
pub mod sweep;
pub mod utils;
