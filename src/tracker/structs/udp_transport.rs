#[derive(Clone, Debug)]
pub struct UdpTransport {
    pub recv_buffer_size: usize,
}
