use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_body, respond, ApiError, ApiResponse};
use crate::config::Config;
use crate::safety::a2l::{
    a2l_charge_limit, lfl_for, min_area_for_a2l, A2lChargeInputs, InstallHeight,
};
use crate::units::{convert_area, convert_mass, AreaUnit, MassUnit};

const INVALID_A2L: &str = "Invalid inputs for A2L calculation";

/// LFL·설치 높이 공통 필드.
#[derive(Debug, Deserialize)]
struct SiteFields {
    refrigerant: Option<String>,
    lfl_kg_m3: Option<f64>,
    install_height_m: Option<f64>,
    /// `floor`, `window`, `wall`, `ceiling`
    install_location: Option<String>,
}

impl SiteFields {
    /// 명시된 LFL이 우선이고, 없으면 냉매 카탈로그에서 찾는다.
    fn lfl(&self) -> Result<f64, ApiError> {
        match (self.lfl_kg_m3, self.refrigerant.as_deref()) {
            (Some(lfl), _) => Ok(lfl),
            (None, Some(id)) => lfl_for(id).map_err(|e| ApiError::BadRequest(e.to_string())),
            (None, None) => Err(ApiError::bad_request(
                "Either lfl_kg_m3 or refrigerant is required",
            )),
        }
    }

    fn height(&self, cfg: &Config) -> Result<f64, ApiError> {
        if let Some(h) = self.install_height_m {
            return Ok(h);
        }
        match self.install_location.as_deref() {
            Some(loc) => InstallHeight::parse(loc)
                .map(InstallHeight::meters)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown install_location: {loc}"))),
            None => Ok(cfg.a2l.default_install_height_m),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChargeLimitRequest {
    #[serde(flatten)]
    site: SiteFields,
    room_area_m2: Option<f64>,
}

/// 실 면적 기준 최대 충전량. 0이면 `allowed: false`로 표시한다.
pub fn charge_limit(body: &Value, cfg: &Config) -> ApiResponse {
    respond(charge_limit_inner(body, cfg))
}

fn charge_limit_inner(body: &Value, cfg: &Config) -> Result<Value, ApiError> {
    let req: ChargeLimitRequest = parse_body(body, INVALID_A2L)?;
    let area = req
        .room_area_m2
        .ok_or_else(|| ApiError::bad_request("room_area_m2 is required"))?;
    let inputs = A2lChargeInputs {
        lfl_kg_per_m3: req.site.lfl()?,
        install_height_m: req.site.height(cfg)?,
        room_area_m2: area,
    };
    let max_charge = a2l_charge_limit(&inputs);
    Ok(json!({
        "lfl_kg_m3": inputs.lfl_kg_per_m3,
        "install_height_m": inputs.install_height_m,
        "room_area_m2": inputs.room_area_m2,
        "room_area_ft2": convert_area(area, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
        "max_charge_kg": max_charge,
        "max_charge_lb": convert_mass(max_charge, MassUnit::Kilogram, MassUnit::Pound),
        "allowed": max_charge > 0.0
    }))
}

#[derive(Debug, Deserialize)]
struct MinAreaRequest {
    #[serde(flatten)]
    site: SiteFields,
    charge_kg: Option<f64>,
}

/// 충전량 기준 최소 실 면적.
pub fn min_area(body: &Value, cfg: &Config) -> ApiResponse {
    respond(min_area_inner(body, cfg))
}

fn min_area_inner(body: &Value, cfg: &Config) -> Result<Value, ApiError> {
    let req: MinAreaRequest = parse_body(body, INVALID_A2L)?;
    let charge = req
        .charge_kg
        .ok_or_else(|| ApiError::bad_request("charge_kg is required"))?;
    let lfl = req.site.lfl()?;
    let height = req.site.height(cfg)?;
    let area = min_area_for_a2l(charge, lfl, height);
    Ok(json!({
        "charge_kg": charge,
        "lfl_kg_m3": lfl,
        "install_height_m": height,
        "min_area_m2": area,
        "min_area_ft2": convert_area(area, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
        "allowed": area > 0.0
    }))
}
