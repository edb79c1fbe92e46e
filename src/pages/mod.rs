//! Verb and page dispatch.
//!
//! Both dispatch stages are enum-keyed lookups with an error-status
//! fallback: an unknown path is a 404, a failing renderer is a 500, and
//! neither ever escapes to the connection layer as an error.

pub mod assets;
pub mod control;
pub mod mode;
pub mod status;

use tracing::error;

use crate::config::Config;
use crate::http::request::{Request, Verb};
use crate::http::response::Response;
use crate::pool::SharedPool;

/// Pages the server knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Status,
    Favicon,
    Stylesheet,
    Control,
    Mode,
}

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Page::Status),
            "/favicon.ico" => Some(Page::Favicon),
            "/css/phone.css" => Some(Page::Stylesheet),
            "/pool" => Some(Page::Control),
            "/mode" => Some(Page::Mode),
            _ => None,
        }
    }
}

/// Maps a request to its response. Never fails: GET and POST route to the
/// page table, PUT/DELETE/HEAD answer 501.
pub async fn dispatch(request: &Request, cfg: &Config, pool: &SharedPool) -> Response {
    match request.verb {
        Verb::Get | Verb::Post => dispatch_page(request, cfg, pool).await,
        Verb::Put | Verb::Delete | Verb::Head => Response::not_implemented(),
    }
}

async fn dispatch_page(request: &Request, cfg: &Config, pool: &SharedPool) -> Response {
    let Some(page) = Page::from_path(&request.path) else {
        return Response::not_found();
    };

    let rendered = match page {
        Page::Status => status::render(pool).await,
        Page::Favicon => assets::favicon(cfg, &request.path).await,
        Page::Stylesheet => assets::stylesheet(cfg, &request.path).await,
        Page::Control => control::render(pool).await,
        // the mode table has its own 404/500 fallback
        Page::Mode => return mode::dispatch(request, pool).await,
    };

    match rendered {
        Ok(response) => response,
        Err(e) => {
            error!(
                "{} {} failed: {:#}",
                request.verb.as_str(),
                request.path,
                e
            );
            Response::internal_error()
        }
    }
}
