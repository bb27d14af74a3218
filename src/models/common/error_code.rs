//! 业务错误码
//!
//! 与 HTTP 状态码解耦的业务层错误码，统一通过 ApiResponse 返回给客户端。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,

    // 401xx 认证错误
    Unauthorized = 40100,
    InvalidCredentials = 40101,
    TokenExpired = 40102,

    // 403xx 授权错误
    Forbidden = 40300,
    SchoolPermissionDenied = 40301,
    GuardianPermissionDenied = 40302,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    SchoolNotFound = 40402,
    StudentNotFound = 40403,
    DocumentNotFound = 40404,
    AssessmentNotFound = 40405,
    CareerMatchNotFound = 40406,
    FileNotFound = 40407,

    // 409xx 冲突
    UserAlreadyExists = 40901,
    SchoolAlreadyExists = 40902,
    StudentAlreadyExists = 40903,

    // 422xx 校验 / 处理失败
    ValidationFailed = 42200,
    FileUploadFailed = 42201,
    FileTypeNotAllowed = 42202,
    FileSizeExceeded = 42203,
    MultifileUploadNotAllowed = 42204,
    ExtractionFailed = 42205,
    ScoringFailed = 42206,

    // 429xx 限流
    RateLimitExceeded = 42900,

    // 500xx 服务器错误
    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::StudentNotFound as i32, 40403);
        assert_eq!(ErrorCode::ScoringFailed as i32, 42206);
    }
}
