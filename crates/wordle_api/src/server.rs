//! tiny_http server adapter.
//!
//! Handles routing, body parsing, CORS and response conversion. Routing is
//! done by [`dispatch`], which is independent of sockets so it can be
//! exercised directly.

use std::io::{Cursor, Read as _};
use std::net::ToSocketAddrs;

use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::error::ApiError;
use crate::handlers::{self, ApiContext};
use crate::types::ErrorBody;

const LIVENESS_TEXT: &str = "Wordle backend is running.";
const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Framework-neutral response produced by [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpReply {
    fn json<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Self {
                status,
                content_type: "application/json",
                body,
            },
            Err(err) => Self::error(&ApiError::internal(format!("failed to encode response: {err}"))),
        }
    }

    fn error(error: &ApiError) -> Self {
        let body = serde_json::to_string(&ErrorBody::from(error))
            .unwrap_or_else(|_| r#"{"error":{"code":"INTERNAL_ERROR","message":""}}"#.to_string());
        Self {
            status: error.status_code(),
            content_type: "application/json",
            body,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }
}

/// Routes one request to its handler.
///
/// `url` may carry a query string; it is ignored. `today` is the date used
/// for "today" routes and guesses without an explicit date.
pub fn dispatch(
    ctx: &ApiContext,
    method: &Method,
    url: &str,
    body: &str,
    today: NaiveDate,
) -> HttpReply {
    let path = url.split('?').next().unwrap_or(url);

    match (method, path) {
        (Method::Options, _) => HttpReply::text(204, ""),
        (Method::Get, "/") => HttpReply::text(200, LIVENESS_TEXT),
        (Method::Get, "/api/today-answer") => {
            reply(200, handlers::get_today_answer(ctx, today))
        }
        (Method::Get, "/api/answers") => reply(200, handlers::list_answers(ctx)),
        (Method::Post, "/api/answer") => match parse_json_body(body) {
            Ok(req) => reply(201, handlers::set_answer(ctx, &req)),
            Err(err) => HttpReply::error(&err),
        },
        (Method::Post, "/api/guess") => match parse_json_body(body) {
            Ok(req) => reply(200, handlers::submit_guess(ctx, &req, today)),
            Err(err) => HttpReply::error(&err),
        },
        (Method::Get, _) if path.starts_with("/api/answer/") => {
            let date = path.strip_prefix("/api/answer/").unwrap_or_default();
            reply(200, handlers::get_answer_for_date(ctx, date))
        }
        _ => HttpReply::error(&ApiError::not_found(format!(
            "API endpoint not found: {method} {path}"
        ))),
    }
}

/// Serves requests on `addr` until the listener fails.
///
/// Requests are handled one at a time on the calling thread.
pub fn serve(addr: impl ToSocketAddrs, ctx: &ApiContext) -> std::io::Result<()> {
    let server = Server::http(addr).map_err(std::io::Error::other)?;
    if let Some(local) = server.server_addr().to_ip() {
        info!("event=server_start module=api status=ok addr={local}");
    }

    for mut request in server.incoming_requests() {
        let response = handle_request(ctx, &mut request);
        if let Err(err) = request.respond(response) {
            warn!("event=server_respond module=api status=error error={err}");
        }
    }

    Ok(())
}

fn handle_request(ctx: &ApiContext, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => dispatch(ctx, &method, &url, &body, Local::now().date_naive()),
        Err(err) => HttpReply::error(&ApiError::bad_request(format!(
            "Failed to read request body: {err}"
        ))),
    };
    debug!(
        "event=http_request module=api method={method} path={} status={}",
        url.split('?').next().unwrap_or_default(),
        reply.status
    );

    into_response(reply)
}

fn into_response(reply: HttpReply) -> Response<Cursor<Vec<u8>>> {
    let mut response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    let headers = CORS_HEADERS
        .iter()
        .copied()
        .chain(std::iter::once(("Content-Type", reply.content_type)));
    for (name, value) in headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    response
}

fn reply<T: Serialize>(status: u16, result: Result<T, ApiError>) -> HttpReply {
    match result {
        Ok(data) => HttpReply::json(status, &data),
        Err(err) => HttpReply::error(&err),
    }
}

fn parse_json_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::bad_request("Expected JSON body"));
    }
    serde_json::from_str(body).map_err(|err| ApiError::bad_request(format!("Invalid JSON: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{into_response, HttpReply};
    use crate::error::ApiError;
    use serde_json::json;
    use std::io::Cursor;
    use tiny_http::Response;

    fn header(response: &Response<Cursor<Vec<u8>>>, name: &'static str) -> Option<String> {
        response
            .headers()
            .iter()
            .find(|header| header.field.equiv(name))
            .map(|header| header.value.as_str().to_string())
    }

    fn assert_cors(response: &Response<Cursor<Vec<u8>>>) {
        assert_eq!(header(response, "Access-Control-Allow-Origin").as_deref(), Some("*"));
        assert_eq!(
            header(response, "Access-Control-Allow-Methods").as_deref(),
            Some("GET, POST, OPTIONS")
        );
        assert_eq!(
            header(response, "Access-Control-Allow-Headers").as_deref(),
            Some("Content-Type")
        );
    }

    #[test]
    fn json_reply_carries_cors_and_content_type() {
        let response = into_response(HttpReply::json(200, &json!({"answer": "crazy"})));
        assert_eq!(response.status_code().0, 200);
        assert_cors(&response);
        assert_eq!(
            header(&response, "Content-Type").as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn error_reply_carries_cors() {
        let response = into_response(HttpReply::error(&ApiError::bad_request("Missing guess")));
        assert_eq!(response.status_code().0, 400);
        assert_cors(&response);
        assert_eq!(
            header(&response, "Content-Type").as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn preflight_reply_carries_cors() {
        let response = into_response(HttpReply::text(204, ""));
        assert_eq!(response.status_code().0, 204);
        assert_cors(&response);
        assert_eq!(
            header(&response, "Content-Type").as_deref(),
            Some("text/plain; charset=utf-8")
        );
    }
}
