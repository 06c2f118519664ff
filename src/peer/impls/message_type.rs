use std::fmt;
use crate::peer::enums::message_type::MessageType;

impl MessageType {
    pub fn from_u8(id: u8) -> Option<MessageType> {
        match id {
            0 => Some(MessageType::Choke),
            1 => Some(MessageType::Unchoke),
            2 => Some(MessageType::Interested),
            3 => Some(MessageType::NotInterested),
            4 => Some(MessageType::Have),
            5 => Some(MessageType::Bitfield),
            6 => Some(MessageType::Request),
            7 => Some(MessageType::Piece),
            8 => Some(MessageType::Cancel),
            9 => Some(MessageType::Port),
            _ => None,
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Choke => write!(f, "choke"),
            MessageType::Unchoke => write!(f, "unchoke"),
            MessageType::Interested => write!(f, "interested"),
            MessageType::NotInterested => write!(f, "not interested"),
            MessageType::Have => write!(f, "have"),
            MessageType::Bitfield => write!(f, "bitfield"),
            MessageType::Request => write!(f, "request"),
            MessageType::Piece => write!(f, "piece"),
            MessageType::Cancel => write!(f, "cancel"),
            MessageType::Port => write!(f, "port"),
        }
    }
}
