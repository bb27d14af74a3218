//! 路径参数安全提取器
//!
//! 直接在 FromRequest 阶段完成解析与校验，
//! 非法参数统一返回 400 与业务错误码，处理函数不再关心解析失败。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, err, ok};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

static DOCUMENT_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{8,64}$").expect("Invalid document token regex"));

fn bad_request(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

fn extract_positive_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| bad_request("Missing path parameter"))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| bad_request("Path parameter must be an integer"))?;

    if id <= 0 {
        return Err(bad_request("Path parameter must be a positive integer"));
    }

    Ok(id)
}

/// 路径段 `{id}` 的安全 i64 提取器
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match extract_positive_i64(req, "id") {
            Ok(id) => ok(SafeIDI64(id)),
            Err(e) => err(e),
        }
    }
}

/// 路径段 `{student_id}` 的安全 i64 提取器
pub struct SafeStudentIdI64(pub i64);

impl FromRequest for SafeStudentIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match extract_positive_i64(req, "student_id") {
            Ok(id) => ok(SafeStudentIdI64(id)),
            Err(e) => err(e),
        }
    }
}

/// 路径段 `{token}` 的文档令牌提取器
///
/// 令牌由 UUID 生成，只允许字母、数字与连字符。
pub struct SafeDocumentToken(pub String);

impl FromRequest for SafeDocumentToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = match req.match_info().get("token") {
            Some(raw) => raw,
            None => return err(bad_request("Missing path parameter")),
        };

        if !DOCUMENT_TOKEN_RE.is_match(raw) {
            return err(bad_request("Invalid document token format"));
        }

        ok(SafeDocumentToken(raw.to_string()))
    }
}
