//! HTTP front end for the widget page.

use rainwater::{
    evaluate, parse_heights, render_page, Breakdown, Config, FormSubmission, SceneOptions,
};
use tiny_http::{Header, Response, Server};

/// A routed response before it is handed to `tiny_http`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reply {
    pub(crate) status: u16,
    pub(crate) content_type: &'static str,
    pub(crate) body: String,
}

impl Reply {
    const fn new(status: u16, content_type: &'static str, body: String) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    fn not_found() -> Self {
        Self::new(404, "text/plain; charset=utf-8", "404 Not Found".to_string())
    }

    fn into_response(self) -> Response<std::io::Cursor<Vec<u8>>> {
        let response = Response::from_string(self.body).with_status_code(self.status);
        match Header::from_bytes(&b"Content-Type"[..], self.content_type.as_bytes()) {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

/// Bind and answer requests until the process is stopped.
pub(crate) fn serve(config: &Config) -> Result<(), String> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let server = Server::http(&addr).map_err(|e| format!("failed to bind {addr}: {e}"))?;

    println!("Rainwater server listening on http://{addr}");
    println!("Press Ctrl+C to stop");

    for request in server.incoming_requests() {
        let url = request.url().to_string();
        let reply = route(request.method(), &url, config);
        tracing::info!(method = %request.method(), %url, status = reply.status, "request");
        if let Err(e) = request.respond(reply.into_response()) {
            tracing::warn!(error = %e, "failed to send response");
        }
    }
    Ok(())
}

/// Map a request line onto a reply.
pub(crate) fn route(method: &tiny_http::Method, url: &str, config: &Config) -> Reply {
    if *method != tiny_http::Method::Get && *method != tiny_http::Method::Head {
        return Reply::new(
            405,
            "text/plain; charset=utf-8",
            "405 Method Not Allowed".to_string(),
        );
    }

    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let form = FormSubmission::from_query(query);
    let mut reply = match path {
        "/" | "/index.html" => page(form, config),
        "/chart.svg" => chart(&form, config),
        "/breakdown.json" => breakdown(&form, config),
        _ => Reply::not_found(),
    };
    if *method == tiny_http::Method::Head {
        reply.body.clear();
    }
    reply
}

fn page(form: FormSubmission, config: &Config) -> Reply {
    match form.into_controller(config) {
        Ok(controller) => Reply::new(200, "text/html; charset=utf-8", render_page(&controller)),
        Err(e) => server_error(&e.to_string()),
    }
}

/// Toggles on the raw endpoints stay on unless the query names them.
fn endpoint_options(form: &FormSubmission) -> SceneOptions {
    SceneOptions {
        show_grid: form.grid.unwrap_or(true),
        show_labels: form.labels.unwrap_or(true),
    }
}

fn input_for(form: &FormSubmission, config: &Config) -> String {
    form.heights
        .clone()
        .unwrap_or_else(|| config.input.initial.clone())
}

fn chart(form: &FormSubmission, config: &Config) -> Reply {
    let style = match config.chart_style() {
        Ok(style) => style,
        Err(e) => return server_error(&e.to_string()),
    };
    let options = endpoint_options(form);
    let view = evaluate(&input_for(form, config), options, &style);
    match (view.svg(), view.error) {
        (Some(svg), _) => Reply::new(200, "image/svg+xml", svg),
        (None, error) => Reply::new(
            422,
            "text/plain; charset=utf-8",
            error.unwrap_or_default(),
        ),
    }
}

fn breakdown(form: &FormSubmission, config: &Config) -> Reply {
    match parse_heights(&input_for(form, config)) {
        Ok(heights) => {
            let table = Breakdown::new(&heights, &heights.water_profile());
            Reply::new(200, "application/json", table.to_json())
        }
        Err(e) => Reply::new(
            422,
            "application/json",
            serde_json::json!({ "error": e.to_string() }).to_string(),
        ),
    }
}

fn server_error(message: &str) -> Reply {
    tracing::error!(%message, "request failed");
    Reply::new(500, "text/plain; charset=utf-8", message.to_string())
}
