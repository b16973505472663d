use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_body, respond, ApiError, ApiResponse};
use crate::airside::{airflow_cfm, diagnose_delta_t};

const INVALID_INPUTS: &str = "Invalid inputs";

#[derive(Debug, Deserialize)]
struct AirflowRequest {
    sensible_heat_btuh: f64,
    delta_t_f: f64,
}

/// 현열 부하 기준 풍량(CFM).
pub fn airflow(body: &Value) -> ApiResponse {
    respond(airflow_inner(body))
}

fn airflow_inner(body: &Value) -> Result<Value, ApiError> {
    let req: AirflowRequest = parse_body(body, INVALID_INPUTS)?;
    let cfm = airflow_cfm(req.sensible_heat_btuh, req.delta_t_f)
        .map_err(|_| ApiError::bad_request(INVALID_INPUTS))?;
    Ok(json!({
        "airflow_cfm": cfm,
        "sensible_heat_btuh": req.sensible_heat_btuh,
        "delta_t_f": req.delta_t_f
    }))
}

#[derive(Debug, Deserialize)]
struct DeltaTRequest {
    return_temp_f: f64,
    supply_temp_f: f64,
}

/// 급기/환기 온도차 진단.
pub fn delta_t(body: &Value) -> ApiResponse {
    respond(delta_t_inner(body))
}

fn delta_t_inner(body: &Value) -> Result<Value, ApiError> {
    let req: DeltaTRequest = parse_body(body, INVALID_INPUTS)?;
    let reading = diagnose_delta_t(req.return_temp_f, req.supply_temp_f);
    Ok(json!({
        "delta_t_f": reading.delta_t_f,
        "return_temp_f": reading.return_temp_f,
        "supply_temp_f": reading.supply_temp_f,
        "status": reading.status.description()
    }))
}
