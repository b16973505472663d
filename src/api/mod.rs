//! 프레임워크에 종속되지 않는 JSON 요청/응답 핸들러.
//!
//! HTTP 서버는 본문을 그대로 넘기고 `ApiResponse`의 상태 코드와 본문을 돌려주면 된다.
//! 성공 시 `{"success": true, "data": ...}`, 실패 시 `{"error": "..."}` 형식이다.

pub mod a2l;
pub mod airside;
pub mod cycle;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;

/// 핸들러 응답. `status`는 HTTP 상태 코드.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            status: 200,
            body: json!({ "success": true, "data": data }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 핸들러 실패 사유. 상태 코드로 매핑된다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Unknown endpoint: {0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    pub(crate) fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        ApiResponse {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }
}

pub(crate) fn respond(result: Result<Value, ApiError>) -> ApiResponse {
    match result {
        Ok(data) => ApiResponse::ok(data),
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(error = %err, "handler failed");
            } else {
                tracing::debug!(error = %err, "request rejected");
            }
            err.into()
        }
    }
}

/// 요청 본문을 타입으로 해석한다. 형식 오류는 `message`로 400을 낸다.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Value, message: &str) -> Result<T, ApiError> {
    serde_json::from_value(body.clone()).map_err(|e| {
        tracing::debug!(error = %e, "request body did not match schema");
        ApiError::bad_request(message)
    })
}

/// 값이 없거나 0이면 기본값을 쓴다.
pub(crate) fn or_default_nonzero(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

/// 지원하는 엔드포인트 이름.
pub const ENDPOINTS: [&str; 7] = [
    "cycle/standard",
    "cycle/compare",
    "cycle/cascade",
    "airflow",
    "delta-t",
    "a2l/charge-limit",
    "a2l/min-area",
];

/// 엔드포인트 이름으로 핸들러를 고른다.
pub fn dispatch(endpoint: &str, body: &Value, cfg: &Config) -> ApiResponse {
    tracing::debug!(endpoint, "dispatching request");
    let route = endpoint.trim_matches('/');
    if !ENDPOINTS.contains(&route) {
        return ApiError::NotFound(route.to_string()).into();
    }
    // 서버 설정 오류는 500.
    if let Err(e) = cfg.validate() {
        return respond(Err(ApiError::Internal(format!("Server configuration error: {e}"))));
    }
    match route {
        "cycle/standard" => cycle::standard_cycle(body, cfg),
        "cycle/compare" => cycle::compare_refrigerants(body, cfg),
        "cycle/cascade" => cycle::cascade_cycle(body, cfg),
        "airflow" => airside::airflow(body),
        "delta-t" => airside::delta_t(body),
        "a2l/charge-limit" => a2l::charge_limit(body, cfg),
        "a2l/min-area" => a2l::min_area(body, cfg),
        other => ApiError::NotFound(other.to_string()).into(),
    }
}

/// 원시 JSON 문자열 본문을 처리한다. 파싱할 수 없으면 400.
pub fn dispatch_str(endpoint: &str, body: &str, cfg: &Config) -> ApiResponse {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => dispatch(endpoint, &value, cfg),
        Err(e) => ApiError::BadRequest(format!("Invalid JSON body: {e}")).into(),
    }
}
