use tracing::error;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::pages::control;
use crate::pool::SharedPool;

/// Mode-change commands the control page's buttons can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lights,
    Spa,
    Clean,
}

impl Mode {
    /// Parses the `mode` parameter value as submitted by the control-page
    /// buttons.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "Lights" => Some(Mode::Lights),
            "Spa" => Some(Mode::Spa),
            "Clean" => Some(Mode::Clean),
            _ => None,
        }
    }
}

/// Applies the requested mode change, then answers with the control page
/// so the buttons reflect the new state. A missing or unrecognized mode
/// is a 404; a failing sub-handler is a 500.
pub async fn dispatch(request: &Request, pool: &SharedPool) -> Response {
    let Some(mode) = request.param("mode").and_then(Mode::from_param) else {
        return Response::not_found();
    };

    match apply(mode, pool).await {
        Ok(response) => response,
        Err(e) => {
            error!("mode {:?} failed: {:#}", mode, e);
            Response::internal_error()
        }
    }
}

async fn apply(mode: Mode, pool: &SharedPool) -> anyhow::Result<Response> {
    {
        let mut state = pool.write().await;
        match mode {
            Mode::Lights => state.toggle_lights(),
            Mode::Spa => state.toggle_spa(),
            Mode::Clean => state.toggle_clean(),
        }
    }

    control::render(pool).await
}
