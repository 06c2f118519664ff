pub mod peer_transport;
