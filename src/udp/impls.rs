pub mod action;
pub mod request;
pub mod response;
pub mod peer_descriptor;
pub mod malformed_response;
