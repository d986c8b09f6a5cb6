use std::net::SocketAddr;

use http::Method;
use tiny_http::{Header, Request, Response, Server};
use url::Url;

use crate::error::HostError;
use crate::modules::routes::{self, Reply};
use crate::settings::Settings;

/// Blocking HTTP host for the dashboard page.
pub struct PageServer {
    server: Server,
    addr: SocketAddr,
}

impl PageServer {
    pub fn bind(settings: &Settings) -> Result<Self, HostError> {
        let requested = settings.socket_addr()?;

        // Port 0 always means "any free port".
        if requested.port() == 0 {
            let port = portpicker::pick_unused_port().ok_or(HostError::NoFreePort)?;
            return Self::bind_addr(SocketAddr::new(requested.ip(), port));
        }

        match Self::bind_addr(requested) {
            Ok(server) => Ok(server),
            Err(HostError::Bind { addr, source }) if settings.pick_free_port => {
                log::warn!("[Server] Port {} unavailable ({}), picking a free one", addr.port(), source);
                let port = portpicker::pick_unused_port().ok_or(HostError::NoFreePort)?;
                Self::bind_addr(SocketAddr::new(requested.ip(), port))
            }
            Err(e) => Err(e),
        }
    }

    fn bind_addr(addr: SocketAddr) -> Result<Self, HostError> {
        let server = Server::http(addr).map_err(|source| HostError::Bind { addr, source })?;
        // Reported address is authoritative if the OS adjusted anything.
        let addr = server.server_addr().to_ip().unwrap_or(addr);
        Ok(Self { server, addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> Result<Url, HostError> {
        Url::parse(&format!("http://{}/", self.addr))
            .map_err(|e| HostError::Config(format!("unusable address {}: {}", self.addr, e)))
    }

    /// Serves requests until the listener shuts down.
    pub fn run(&self) -> Result<(), HostError> {
        log::info!("[Server] Dashboard available at {}", self.url()?);

        for request in self.server.incoming_requests() {
            Self::handle(request);
        }

        log::info!("[Server] Listener closed");
        Ok(())
    }

    /// Blocks until one request arrives, then answers it.
    pub fn serve_one(&self) -> Result<(), HostError> {
        let request = self.server.recv()?;
        Self::handle(request);
        Ok(())
    }

    fn handle(request: Request) {
        let method = Method::from_bytes(request.method().to_string().as_bytes())
            .unwrap_or(Method::GET);
        let reply = routes::route(&method, request.url());

        log::debug!("[Server] {} {} -> {}", method, request.url(), reply.status.as_u16());

        if let Err(e) = request.respond(into_response(reply)) {
            log::warn!("[Server] Failed to send response: {}", e);
        }
    }
}

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn into_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status.as_u16());

    if let Some(h) = header("Content-Type", &reply.content_type) {
        response.add_header(h);
    }
    if let Some(allow) = reply.allow {
        if let Some(h) = header("Allow", allow) {
            response.add_header(h);
        }
    }
    if let Some(h) = header("Cache-Control", "no-cache") {
        response.add_header(h);
    }

    response
}
