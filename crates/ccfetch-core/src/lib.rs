pub mod config;
pub mod logging;

pub mod cdx;
pub mod cluster;
pub mod downloader;
pub mod index;
pub mod range;
pub mod retry;
pub mod transport;
