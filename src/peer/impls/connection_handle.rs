use std::fmt;
use mio::Token;
use crate::peer::structs::connection_handle::ConnectionHandle;

impl From<ConnectionHandle> for Token {
    fn from(handle: ConnectionHandle) -> Self {
        Token(handle.0)
    }
}

impl From<Token> for ConnectionHandle {
    fn from(token: Token) -> Self {
        ConnectionHandle(token.0)
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
