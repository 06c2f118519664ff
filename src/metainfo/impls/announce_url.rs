use std::fmt;
use std::str::FromStr;
use crate::metainfo::enums::metainfo_error::MetainfoError;
use crate::metainfo::structs::announce_url::AnnounceUrl;

const UDP_SCHEME: &str = "udp://";

impl AnnounceUrl {
    pub fn parse(url: &str) -> Result<AnnounceUrl, MetainfoError> {
        let trimmed = url.trim();
        let rest = match trimmed.get(..UDP_SCHEME.len()) {
            Some(scheme) if scheme.eq_ignore_ascii_case(UDP_SCHEME) => &trimmed[UDP_SCHEME.len()..],
            _ => return Err(MetainfoError::UnsupportedScheme(url.to_string())),
        };

        let (authority, path) = match rest.find('/') {
            Some(index) => (&rest[..index], &rest[index..]),
            None => (rest, ""),
        };
        let Some((host, port)) = authority.rsplit_once(':') else {
            return Err(MetainfoError::InvalidPort(url.to_string()));
        };
        if host.is_empty() {
            return Err(MetainfoError::MissingHost(url.to_string()));
        }
        let port = match port.parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => return Err(MetainfoError::InvalidPort(url.to_string())),
        };

        Ok(AnnounceUrl {
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }
}

impl FromStr for AnnounceUrl {
    type Err = MetainfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnnounceUrl::parse(s)
    }
}

impl fmt::Display for AnnounceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{UDP_SCHEME}{}:{}{}", self.host, self.port, self.path)
    }
}
