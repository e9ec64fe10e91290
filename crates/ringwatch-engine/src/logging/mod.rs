//! Logger bootstrap. Everything else goes through the `log` facade.

mod init;

pub use init::init_logging;
