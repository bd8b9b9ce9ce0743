use actix_web::http::StatusCode;
use actix_web::HttpResponse;

// walk the error's sources so Debug shows the whole chain in the logs
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

// the JSON shape every failed api call answers with: {"error": "..."}
pub fn json_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { error: message })
}
