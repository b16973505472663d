//! 공기측 현장 점검 계산. 현열 기준 풍량과 급기/환기 온도차 진단으로 구성한다.

pub mod airflow;
pub mod delta_t;

pub use airflow::{airflow_cfm, AirsideError};
pub use delta_t::{diagnose_delta_t, DeltaTReading, DeltaTStatus};
