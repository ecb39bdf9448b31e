//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON, unparsable query strings) are turned
//! into the same `invalid_request` envelope the domain uses, so clients see a
//! single error schema whatever layer rejected the request.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, IdValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidJson,
    InvalidQuery,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidQuery => "invalid_query",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn json_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request("request body must be valid JSON").with_details(json!({
        "code": ErrorCode::InvalidJson.as_str(),
        "reason": err.to_string(),
    }))
}

fn query_error(err: &QueryPayloadError) -> Error {
    Error::invalid_request("query string is malformed").with_details(json!({
        "code": ErrorCode::InvalidQuery.as_str(),
        "reason": err.to_string(),
    }))
}

/// JSON extractor configuration mapping body errors to `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| json_error(&err).into())
}

/// Query extractor configuration mapping parse errors to `invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, _req: &HttpRequest| query_error(&err).into())
}

/// Parse an identifier taken from the request path.
pub(crate) fn parse_path_id<T>(
    raw: String,
    field: FieldName,
    parse: impl FnOnce(String) -> Result<T, IdValidationError>,
) -> Result<T, Error> {
    parse(raw.clone()).map_err(|err| {
        let field = field.as_str();
        Error::invalid_request(format!("{field} is not a valid identifier")).with_details(json!({
            "field": field,
            "value": raw,
            "code": ErrorCode::InvalidId.as_str(),
            "reason": err.to_string(),
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode as DomainCode, ShiftId};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Body {
        #[serde(rename = "name")]
        _name: Option<String>,
    }

    #[derive(Deserialize)]
    struct Filter {
        #[serde(rename = "page")]
        _page: Option<u32>,
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_json_bodies_become_invalid_requests() {
        let app = actix_test::init_service(App::new().app_data(json_config()).route(
            "/",
            web::post().to(|_: web::Json<Body>| async { HttpResponse::Ok().finish() }),
        ))
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], "invalid_json");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_query_strings_become_invalid_requests() {
        let app = actix_test::init_service(App::new().app_data(query_config()).route(
            "/",
            web::get().to(|_: web::Query<Filter>| async { HttpResponse::Ok().finish() }),
        ))
        .await;
        let request = actix_test::TestRequest::get().uri("/?page=first").to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], "invalid_query");
    }

    #[rstest]
    fn padded_path_ids_are_rejected() {
        let err = parse_path_id(" 1".to_owned(), FieldName::new("id"), ShiftId::new)
            .expect_err("padded id");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(err.details().and_then(|d| d.get("field")), Some(&json!("id")));
    }

    #[rstest]
    fn well_formed_path_ids_parse() {
        let id = parse_path_id("abc".to_owned(), FieldName::new("id"), ShiftId::new)
            .expect("valid id");
        assert_eq!(id.as_ref(), "abc");
    }
}
