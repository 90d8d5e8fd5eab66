use board::config::{ConfigError, load_sheet_url, try_load};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub sheet_url: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "1111")?,
            sheet_url: load_sheet_url()?,
        })
    }
}
