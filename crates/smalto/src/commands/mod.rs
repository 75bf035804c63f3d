pub mod autostart;
pub mod banner;
pub mod daemon;
pub mod init;
pub mod list;
pub mod reload;
pub mod start;
pub mod status;
pub mod stop;
pub mod sweep;
