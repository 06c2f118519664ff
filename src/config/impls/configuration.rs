use std::fs::File;
use std::io::Write;
use std::str::FromStr;
use crate::config::enums::backoff_kind::BackoffKind;
use crate::config::enums::completion_policy::CompletionPolicy;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::reactor_config::ReactorConfig;
use crate::config::structs::torrent_config::TorrentConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker: TrackerConfig {
                request_timeout_ms: 1000,
                max_attempts: 8,
                backoff: BackoffKind::exponential,
                backoff_base_ms: 250,
                backoff_max_ms: 4000,
                connection_ttl_secs: 60,
                num_want: -1,
                listen_port: 6881,
                event: AnnounceEvent::None,
                recv_buffer_size: 65536,
            },
            reactor: ReactorConfig {
                poll_timeout_ms: 250,
                handshake_timeout_secs: 10,
                max_peers: 50,
                events_capacity: 1024,
                read_chunk_size: 16384,
                max_frame_length: 1_048_576,
                completion: CompletionPolicy::until_handshaken,
            },
            torrent: TorrentConfig {
                announce: String::from("udp://tracker.example.org:6969/announce"),
                info_hash: InfoHash([0u8; 20]),
                total_length: 0,
                num_pieces: 0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads and validates `path`.
    ///
    /// When the file is missing or corrupt and `create` is set, a default
    /// configuration is written to `path` and the error is still returned, so
    /// the operator gets a chance to edit it before anything runs.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and run again, exiting now...");
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        Err(e)
                    }
                };
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = [
            ("log_level", LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()), "must be one of off, trace, debug, info, warn, error"),
            ("tracker.max_attempts", self.tracker.max_attempts > 0, "must be at least 1"),
            ("tracker.request_timeout_ms", self.tracker.request_timeout_ms > 0, "must be greater than 0"),
            ("tracker.backoff_max_ms", self.tracker.backoff_max_ms >= self.tracker.backoff_base_ms, "must not be lower than backoff_base_ms"),
            ("reactor.poll_timeout_ms", self.reactor.poll_timeout_ms > 0, "must be greater than 0"),
            ("reactor.events_capacity", self.reactor.events_capacity > 0, "must be greater than 0"),
            ("reactor.read_chunk_size", self.reactor.read_chunk_size > 0, "must be greater than 0"),
            ("torrent.announce", self.torrent.announce.starts_with("udp://"), "must be a udp:// URL"),
        ];

        for (name, valid, reason) in check_map {
            Self::validate_value(name, valid, reason)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, valid: bool, reason: &str) -> Result<(), ConfigurationError> {
        if !valid {
            return Err(ConfigurationError::Invalid(format!("Error checking {name} [:] {reason}")));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigurationError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigurationError::Invalid(format!("Unknown log level \"{}\"", self.log_level)))
    }
}
