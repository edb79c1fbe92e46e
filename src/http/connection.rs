use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::Config;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::pages;
use crate::pool::SharedPool;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    cfg: Config,
    pool: SharedPool,
}

impl Connection {
    pub fn new(stream: TcpStream, cfg: Config, pool: SharedPool) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            cfg,
            pool,
        }
    }

    /// Serves exactly one request, then drops the socket.
    ///
    /// A peer that closes without sending anything gets no response and no
    /// error; a garbled request gets a 400. Everything else goes through
    /// the page dispatcher, which always yields a response.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let response = match self.read_request().await? {
            Some(Ok(request)) => {
                if self.cfg.debug_http {
                    debug!(
                        verb = request.verb.as_str(),
                        path = %request.path,
                        params = ?request.params,
                        "request"
                    );
                }
                pages::dispatch(&request, &self.cfg, &self.pool).await
            }

            Some(Err(e)) => {
                if self.cfg.debug_http {
                    debug!("rejecting malformed request: {:?}", e);
                }
                Response::bad_request()
            }

            // Peer closed without sending a request: abandon silently.
            None => return Ok(()),
        };

        if self.cfg.debug_http {
            debug!(
                status = response.status.as_u16(),
                length = response.body.len(),
                "response"
            );
        }

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Accumulates reads until the buffer parses as a complete request.
    ///
    /// `None` means the peer closed before sending any bytes. A peer that
    /// closes mid-request surfaces the parser's verdict on what it did
    /// send.
    async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, ParseError>>> {
        loop {
            match parse_request(&self.buffer) {
                Ok((request, _consumed)) => return Ok(Some(Ok(request))),
                Err(ParseError::Incomplete) => {}
                Err(e) => return Ok(Some(Err(e))),
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(Err(ParseError::Incomplete)));
            }
        }
    }
}
