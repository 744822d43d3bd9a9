use anyhow::Result;
use std::net::{IpAddr, SocketAddr};

use crate::mock_server;

/// Run the serve-mock command until interrupted
pub async fn run_serve_mock_command(host: IpAddr, port: u16) -> Result<()> {
    let addr = SocketAddr::new(host, port);
    println!("Serving mock facility API at http://{addr}/api");
    mock_server::serve(addr).await
}
