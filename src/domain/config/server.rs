use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_IP: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The path to your Satisfactory saves directory is required")]
    MissingSaveDirectory,

    #[error("Save path does not exist: {0}")]
    SaveDirectoryNotFound(PathBuf),

    #[error("Save path is not a directory: {0}")]
    SaveDirectoryNotADirectory(PathBuf),
}

/// Settings fixed at startup and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub save_dir: PathBuf,
    pub ip: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(save_dir: Option<PathBuf>, ip: IpAddr, port: u16) -> Result<Self, ConfigError> {
        let save_dir = save_dir.ok_or(ConfigError::MissingSaveDirectory)?;
        if !save_dir.exists() {
            return Err(ConfigError::SaveDirectoryNotFound(save_dir));
        }
        if !save_dir.is_dir() {
            return Err(ConfigError::SaveDirectoryNotADirectory(save_dir));
        }

        Ok(Self { save_dir, ip, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}
