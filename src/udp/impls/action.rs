use std::fmt;
use crate::udp::enums::action::Action;

impl Action {
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    pub fn from_i32(action: i32) -> Option<Action> {
        match action {
            0 => Some(Action::Connect),
            1 => Some(Action::Announce),
            3 => Some(Action::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Connect => write!(f, "connect"),
            Action::Announce => write!(f, "announce"),
            Action::Error => write!(f, "error"),
        }
    }
}
