use chrono::Utc;
use log::info;
use std::io::Write;

/// Logger configuration for the storefront client
pub struct VetrinaLogger;

impl VetrinaLogger {
    /// Initialize env_logger with the project's timestamped format
    pub fn init() -> Result<(), Box<dyn std::error::Error>> {
        env_logger::Builder::from_default_env()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}:{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .try_init()?;

        info!("Vetrina logger initialized");
        Ok(())
    }
}
