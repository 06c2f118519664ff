use std::fmt;
use std::fmt::Formatter;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use rand::RngExt;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

/// Azureus-style client prefix placed in front of generated peer ids.
pub const PEER_ID_PREFIX: &[u8; 8] = b"-TS0100-";

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    binascii::bin2hex(data, &mut chars).map_err(|_| fmt::Error)?;
    write!(f, "{}", std::str::from_utf8(&chars).map_err(|_| fmt::Error)?)
}

/// Returns `0xFF` for anything that is not a hex digit.
#[inline]
pub(crate) fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0xFF,
    }
}

pub(crate) fn hex_to_bytes20(s: &str) -> Option<[u8; 20]> {
    if s.len() != 40 {
        return None;
    }
    let mut result = [0u8; 20];
    for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
        let high = hex_to_nibble(chunk[0]);
        let low = hex_to_nibble(chunk[1]);
        if high == 0xFF || low == 0xFF {
            return None;
        }
        result[i] = (high << 4) | low;
    }
    Some(result)
}

/// A random non-negative 31-bit value, as used for transaction ids.
pub fn generate_transaction_id() -> i32 {
    let mut rng = rand::rng();
    rng.random_range(0..=i32::MAX)
}

/// A random 31-bit announce key.
pub fn generate_key() -> u32 {
    let mut rng = rand::rng();
    rng.random_range(0..=i32::MAX as u32)
}

pub fn generate_peer_id_bytes() -> [u8; 20] {
    let mut rng = rand::rng();
    let mut bytes: [u8; 20] = rng.random();
    bytes[..PEER_ID_PREFIX.len()].copy_from_slice(PEER_ID_PREFIX);
    bytes
}

pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError>
{
    let level = config.level_filter()?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| ConfigurationError::Invalid(format!("Failed to initialize logging: {e}")))?;
    info!("logging initialized.");
    Ok(())
}
