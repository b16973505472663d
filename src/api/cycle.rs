use serde::Deserialize;
use serde_json::{json, Value};

use super::{or_default_nonzero, parse_body, respond, ApiError, ApiResponse};
use crate::config::Config;
use crate::cycle::cascade::{calculate_cascade, cascade_overlap_k, StageBalance};
use crate::cycle::compare::{self, ComparisonConditions};
use crate::cycle::{calculate_cycle, calculate_cycle_checked, CycleInputs, CycleResult};

const MISSING_CYCLE_PARAMS: &str = "Missing required cycle parameters";

#[derive(Debug, Deserialize)]
struct CycleRequest {
    refrigerant: Option<String>,
    evap_temp_c: Option<f64>,
    cond_temp_c: Option<f64>,
    superheat_c: Option<f64>,
    subcooling_c: Option<f64>,
}

impl CycleRequest {
    fn into_inputs(self, cfg: &Config) -> Result<CycleInputs, ApiError> {
        let refrigerant = self
            .refrigerant
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| ApiError::bad_request(MISSING_CYCLE_PARAMS))?;
        let (Some(evap), Some(cond)) = (self.evap_temp_c, self.cond_temp_c) else {
            return Err(ApiError::bad_request(MISSING_CYCLE_PARAMS));
        };
        Ok(CycleInputs::new(
            refrigerant,
            evap,
            cond,
            or_default_nonzero(self.superheat_c, cfg.cycle.default_superheat_k),
            or_default_nonzero(self.subcooling_c, cfg.cycle.default_subcooling_k),
        ))
    }
}

fn kpa(pa: f64) -> f64 {
    pa / 1000.0
}

fn run_cycle(inputs: &CycleInputs, cfg: &Config) -> Result<CycleResult, ApiError> {
    let model = cfg.cycle.model();
    if cfg.cycle.strict {
        calculate_cycle_checked(inputs, &model).map_err(|e| ApiError::BadRequest(e.to_string()))
    } else {
        Ok(calculate_cycle(inputs, &model))
    }
}

/// 단순 사이클 계산. 상태점 1~4와 성능 지표를 돌려준다.
pub fn standard_cycle(body: &Value, cfg: &Config) -> ApiResponse {
    respond(standard_cycle_inner(body, cfg))
}

fn standard_cycle_inner(body: &Value, cfg: &Config) -> Result<Value, ApiError> {
    let inputs = parse_body::<CycleRequest>(body, MISSING_CYCLE_PARAMS)?.into_inputs(cfg)?;
    let r = run_cycle(&inputs, cfg)?;

    let load = cfg.cycle.reference_load_kw;
    let work = load / r.cop_cooling;
    Ok(json!({
        "refrigerant": inputs.refrigerant_id,
        "cycle_type": "standard",
        "valid_cycle": r.is_valid_cycle(),
        "state_points": {
            "1": {
                "label": "suction",
                "temp_c": r.suction_temp_c,
                "pressure_kpa": kpa(r.evaporator_pressure_pa),
                "phase": "Vapor"
            },
            "2": {
                "label": "discharge",
                "temp_c": r.discharge_temp_c,
                "pressure_kpa": kpa(r.condenser_pressure_pa),
                "phase": "Vapor"
            },
            "3": {
                "label": "condenser_outlet",
                "temp_c": r.liquid_temp_c,
                "pressure_kpa": kpa(r.condenser_pressure_pa),
                "phase": "Liquid"
            },
            "4": {
                "label": "evaporator_inlet",
                "temp_c": inputs.evaporator_temp_c,
                "pressure_kpa": kpa(r.evaporator_pressure_pa),
                "phase": "Mixture"
            }
        },
        "performance": {
            "cop": r.cop_cooling,
            "cop_heating": r.cop_heating,
            "cooling_capacity_kw": load,
            "compressor_work_kw": work,
            "heat_rejection_kw": load + work,
            "pressure_ratio": r.pressure_ratio,
            "discharge_temp_c": r.discharge_temp_c,
            "discharge_limit_warning": r.discharge_temp_c > cfg.cycle.discharge_limit_c
        }
    }))
}

#[derive(Debug, Deserialize)]
struct CompareParams {
    evap_temp_c: Option<f64>,
    cond_temp_c: Option<f64>,
    superheat_c: Option<f64>,
    subcooling_c: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CompareRequest {
    refrigerants: Option<Vec<String>>,
    cycle_params: Option<CompareParams>,
}

const INVALID_COMPARISON: &str = "Invalid inputs for comparison";

/// 같은 조건에서 여러 냉매를 비교한다.
pub fn compare_refrigerants(body: &Value, cfg: &Config) -> ApiResponse {
    respond(compare_inner(body, cfg))
}

fn compare_inner(body: &Value, cfg: &Config) -> Result<Value, ApiError> {
    let req: CompareRequest = parse_body(body, INVALID_COMPARISON)?;
    let (Some(ids), Some(params)) = (req.refrigerants, req.cycle_params) else {
        return Err(ApiError::bad_request(INVALID_COMPARISON));
    };
    if ids.is_empty() {
        return Err(ApiError::bad_request(INVALID_COMPARISON));
    }
    let (Some(evap), Some(cond)) = (params.evap_temp_c, params.cond_temp_c) else {
        return Err(ApiError::bad_request(MISSING_CYCLE_PARAMS));
    };
    let conditions = ComparisonConditions {
        evaporator_temp_c: evap,
        condenser_temp_c: cond,
        superheat_k: or_default_nonzero(params.superheat_c, cfg.cycle.default_superheat_k),
        subcooling_k: or_default_nonzero(params.subcooling_c, cfg.cycle.default_subcooling_k),
        load_kw: cfg.cycle.reference_load_kw,
    };
    let entries = compare::compare_refrigerants(&ids, &conditions, &cfg.cycle.model());
    let best = compare::best_by_cop(&entries).map(|e| e.refrigerant_id.clone());

    let results: Vec<Value> = entries
        .iter()
        .map(|e| {
            json!({
                "refrigerant": e.refrigerant_id,
                "cop": e.cycle.cop_cooling,
                "cop_heating": e.cycle.cop_heating,
                "pressure_ratio": e.cycle.pressure_ratio,
                "suction_pressure_kpa": kpa(e.cycle.evaporator_pressure_pa),
                "discharge_pressure_kpa": kpa(e.cycle.condenser_pressure_pa),
                "discharge_temp_c": e.cycle.discharge_temp_c,
                "performance": {
                    "cop": e.cycle.cop_cooling,
                    "cooling_capacity_kw": conditions.load_kw,
                    "compressor_work_kw": e.compressor_work_kw,
                    "heat_rejection_kw": e.heat_rejection_kw
                }
            })
        })
        .collect();
    Ok(json!({ "results": results, "best": best }))
}

#[derive(Debug, Deserialize)]
struct CascadeRequest {
    lt_cycle: Option<CycleRequest>,
    ht_cycle: Option<CycleRequest>,
}

const MISSING_CASCADE: &str = "Missing LT or HT cycle parameters";

/// 2원 캐스케이드 계산. 기준 부하는 설정의 `reference_load_kw`.
pub fn cascade_cycle(body: &Value, cfg: &Config) -> ApiResponse {
    respond(cascade_inner(body, cfg))
}

fn stage_json(refrigerant: &str, stage: &StageBalance) -> Value {
    json!({
        "refrigerant": refrigerant,
        "cop": stage.cycle.cop_cooling,
        "capacity_kw": stage.capacity_kw,
        "work_kw": stage.work_kw,
        "heat_rejection_kw": stage.heat_rejection_kw,
        "pressures": {
            "evap_kpa": kpa(stage.cycle.evaporator_pressure_pa),
            "cond_kpa": kpa(stage.cycle.condenser_pressure_pa)
        },
        "temps": {
            "discharge_c": stage.cycle.discharge_temp_c,
            "suction_c": stage.cycle.suction_temp_c
        }
    })
}

fn cascade_inner(body: &Value, cfg: &Config) -> Result<Value, ApiError> {
    let req: CascadeRequest = parse_body(body, MISSING_CASCADE)?;
    let (Some(lt), Some(ht)) = (req.lt_cycle, req.ht_cycle) else {
        return Err(ApiError::bad_request(MISSING_CASCADE));
    };
    let lt = lt.into_inputs(cfg)?;
    let ht = ht.into_inputs(cfg)?;
    let model = cfg.cycle.model();
    if cfg.cycle.strict {
        for stage in [&lt, &ht] {
            calculate_cycle_checked(stage, &model)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        }
    }

    let res = calculate_cascade(&lt, &ht, &model, cfg.cycle.reference_load_kw);
    Ok(json!({
        "system": {
            "cop": res.system_cop,
            "cooling_capacity_kw": res.cooling_capacity_kw,
            "total_work_kw": res.total_work_kw,
            "heat_rejection_kw": res.heat_rejection_kw,
            "overlap_k": cascade_overlap_k(&lt, &ht)
        },
        "lt_cycle": stage_json(&lt.refrigerant_id, &res.low_temp),
        "ht_cycle": stage_json(&ht.refrigerant_id, &res.high_temp)
    }))
}
