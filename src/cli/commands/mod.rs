mod init;
mod probe;

pub use init::cmd_init;
pub use probe::cmd_probe;
