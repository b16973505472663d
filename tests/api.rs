//! JSON 핸들러 계약 테스트.
use approx::assert_relative_eq;
use serde_json::{json, Value};

use hvac_engineering_toolbox::api::{self, dispatch, dispatch_str};
use hvac_engineering_toolbox::config::Config;

fn data(resp: &api::ApiResponse) -> &Value {
    assert_eq!(resp.status, 200, "body: {}", resp.body);
    assert_eq!(resp.body["success"], true);
    &resp.body["data"]
}

fn error_of(resp: &api::ApiResponse) -> &str {
    resp.body["error"].as_str().unwrap_or_default()
}

#[test]
fn standard_cycle_reports_state_points() {
    let cfg = Config::default();
    let resp = api::cycle::standard_cycle(
        &json!({
            "refrigerant": "R134a",
            "evap_temp_c": -10.0,
            "cond_temp_c": 45.0,
            "superheat_c": 5.0,
            "subcooling_c": 2.0
        }),
        &cfg,
    );
    let d = data(&resp);
    assert_eq!(d["refrigerant"], "R134a");
    assert_eq!(d["cycle_type"], "standard");
    assert_eq!(d["state_points"]["3"]["temp_c"], 43.0);
    assert_eq!(d["state_points"]["3"]["phase"], "Liquid");
    assert_eq!(d["state_points"]["4"]["temp_c"], -10.0);
    assert_relative_eq!(
        d["state_points"]["1"]["pressure_kpa"].as_f64().unwrap(),
        24.176,
        max_relative = 1e-4
    );

    let perf = &d["performance"];
    let cop = perf["cop"].as_f64().unwrap();
    let work = perf["compressor_work_kw"].as_f64().unwrap();
    assert_relative_eq!(cop * work, 10.0, epsilon = 1e-9);
    assert_relative_eq!(perf["heat_rejection_kw"].as_f64().unwrap(), 10.0 + work, epsilon = 1e-9);
    assert_eq!(perf["discharge_limit_warning"], false);
}

#[test]
fn zero_or_missing_superheat_uses_default() {
    let cfg = Config::default();
    let resp = dispatch(
        "cycle/standard",
        &json!({
            "refrigerant": "R410A",
            "evap_temp_c": 0.0,
            "cond_temp_c": 40.0,
            "superheat_c": 0
        }),
        &cfg,
    );
    let d = data(&resp);
    assert_relative_eq!(d["state_points"]["1"]["temp_c"].as_f64().unwrap(), 5.0, epsilon = 1e-9);
    assert_eq!(d["state_points"]["3"]["temp_c"], 35.0);
}

#[test]
fn missing_cycle_fields_are_rejected() {
    let cfg = Config::default();
    for body in [
        json!({ "evap_temp_c": -10.0, "cond_temp_c": 45.0 }),
        json!({ "refrigerant": "", "evap_temp_c": -10.0, "cond_temp_c": 45.0 }),
        json!({ "refrigerant": "R134a", "cond_temp_c": 45.0 }),
        json!({ "refrigerant": "R134a", "evap_temp_c": "cold", "cond_temp_c": 45.0 }),
    ] {
        let resp = dispatch("cycle/standard", &body, &cfg);
        assert_eq!(resp.status, 400, "{body}");
        assert_eq!(error_of(&resp), "Missing required cycle parameters");
    }
}

#[test]
fn degenerate_cycle_is_nulls_unless_strict() {
    let body = json!({ "refrigerant": "R134a", "evap_temp_c": 10.0, "cond_temp_c": 10.0 });

    let permissive = dispatch("cycle/standard", &body, &Config::default());
    let d = data(&permissive);
    assert_eq!(d["valid_cycle"], false);
    assert!(d["performance"]["cop"].is_null());

    let mut strict = Config::default();
    strict.cycle.strict = true;
    let resp = dispatch("cycle/standard", &body, &strict);
    assert_eq!(resp.status, 400);
    assert!(!error_of(&resp).is_empty());
}

#[test]
fn discharge_limit_is_configurable() {
    let mut cfg = Config::default();
    cfg.cycle.discharge_limit_c = 80.0;
    let resp = dispatch(
        "cycle/standard",
        &json!({ "refrigerant": "R134a", "evap_temp_c": -10.0, "cond_temp_c": 45.0 }),
        &cfg,
    );
    assert_eq!(data(&resp)["performance"]["discharge_limit_warning"], true);
}

#[test]
fn compare_returns_results_and_best() {
    let cfg = Config::default();
    let resp = dispatch(
        "cycle/compare",
        &json!({
            "refrigerants": ["R134a", "R410A", "R744"],
            "cycle_params": { "evap_temp_c": -10.0, "cond_temp_c": 45.0 }
        }),
        &cfg,
    );
    let d = data(&resp);
    assert_eq!(d["results"].as_array().unwrap().len(), 3);
    assert_eq!(d["results"][2]["refrigerant"], "R744");
    assert_eq!(d["best"], "R134a");

    for bad in [
        json!({
            "refrigerants": [],
            "cycle_params": { "evap_temp_c": -10.0, "cond_temp_c": 45.0 }
        }),
        json!({ "refrigerants": "R134a", "cycle_params": {} }),
        json!({ "refrigerants": ["R134a"] }),
    ] {
        let resp = dispatch("cycle/compare", &bad, &cfg);
        assert_eq!(resp.status, 400);
        assert_eq!(error_of(&resp), "Invalid inputs for comparison");
    }
}

#[test]
fn cascade_balances_stages() {
    let cfg = Config::default();
    let resp = dispatch(
        "cycle/cascade",
        &json!({
            "lt_cycle": { "refrigerant": "R744", "evap_temp_c": -40.0, "cond_temp_c": -5.0 },
            "ht_cycle": { "refrigerant": "R134a", "evap_temp_c": -10.0, "cond_temp_c": 40.0 }
        }),
        &cfg,
    );
    let d = data(&resp);
    assert_relative_eq!(d["system"]["cop"].as_f64().unwrap(), 1.5477, max_relative = 1e-4);
    assert_eq!(d["system"]["overlap_k"], 5.0);
    assert_eq!(
        d["ht_cycle"]["capacity_kw"].as_f64().unwrap(),
        d["lt_cycle"]["heat_rejection_kw"].as_f64().unwrap()
    );

    let resp = dispatch(
        "cycle/cascade",
        &json!({
            "lt_cycle": { "refrigerant": "R744", "evap_temp_c": -40.0, "cond_temp_c": -5.0 }
        }),
        &cfg,
    );
    assert_eq!(resp.status, 400);
    assert_eq!(error_of(&resp), "Missing LT or HT cycle parameters");
}

#[test]
fn airflow_and_delta_t() {
    let cfg = Config::default();
    let resp = dispatch("airflow", &json!({ "sensible_heat_btuh": 36000, "delta_t_f": 20 }), &cfg);
    assert_relative_eq!(data(&resp)["airflow_cfm"].as_f64().unwrap(), 1666.667, epsilon = 1e-3);

    for bad in [
        json!({ "sensible_heat_btuh": 36000, "delta_t_f": 0 }),
        json!({ "sensible_heat_btuh": "lots", "delta_t_f": 20 }),
    ] {
        let resp = dispatch("airflow", &bad, &cfg);
        assert_eq!(resp.status, 400);
        assert_eq!(error_of(&resp), "Invalid inputs");
    }

    let resp = dispatch("delta-t", &json!({ "return_temp_f": 75, "supply_temp_f": 62 }), &cfg);
    let d = data(&resp);
    assert_eq!(d["delta_t_f"], 13.0);
    assert_eq!(d["status"], "Low Delta T (Possible Airflow Issue or Low Charge)");
}

#[test]
fn a2l_charge_limit_from_refrigerant() {
    let cfg = Config::default();
    let resp = dispatch(
        "a2l/charge-limit",
        &json!({ "refrigerant": "R32", "install_location": "wall", "room_area_m2": 20.0 }),
        &cfg,
    );
    let d = data(&resp);
    assert_eq!(d["lfl_kg_m3"], 0.307);
    assert_eq!(d["install_height_m"], 1.8);
    assert_relative_eq!(d["max_charge_kg"].as_f64().unwrap(), 4.56, epsilon = 0.05);
    assert_eq!(d["allowed"], true);
}

#[test]
fn a2l_zero_result_is_not_allowed() {
    let cfg = Config::default();
    let resp = dispatch(
        "a2l/charge-limit",
        &json!({ "lfl_kg_m3": 0.307, "install_height_m": 1.8, "room_area_m2": 0.0 }),
        &cfg,
    );
    let d = data(&resp);
    assert_eq!(d["max_charge_kg"], 0.0);
    assert_eq!(d["allowed"], false);
}

#[test]
fn a2l_rejects_refrigerant_without_lfl() {
    let cfg = Config::default();
    let resp = dispatch(
        "a2l/charge-limit",
        &json!({ "refrigerant": "R134a", "room_area_m2": 20.0 }),
        &cfg,
    );
    assert_eq!(resp.status, 400);

    let resp = dispatch("a2l/min-area", &json!({ "charge_kg": 2.0 }), &cfg);
    assert_eq!(resp.status, 400);
}

#[test]
fn a2l_min_area_uses_config_height() {
    let mut cfg = Config::default();
    cfg.a2l.default_install_height_m = 0.6;
    let resp = dispatch(
        "a2l/min-area",
        &json!({ "refrigerant": "R32", "charge_kg": 1.5 }),
        &cfg,
    );
    let d = data(&resp);
    assert_eq!(d["install_height_m"], 0.6);
    assert!(d["min_area_m2"].as_f64().unwrap() > 0.0);
    assert_eq!(d["allowed"], true);
}

#[test]
fn unknown_endpoint_and_bad_json() {
    let cfg = Config::default();
    assert_eq!(dispatch("cycle/unknown", &json!({}), &cfg).status, 404);
    let resp = dispatch_str("airflow", "{not json", &cfg);
    assert_eq!(resp.status, 400);
    assert!(error_of(&resp).starts_with("Invalid JSON body"));
    assert!(dispatch_str("/delta-t/", r#"{"return_temp_f":75,"supply_temp_f":55}"#, &cfg)
        .is_success());
}

#[test]
fn invalid_server_config_is_internal_error() {
    let mut cfg = Config::default();
    cfg.cycle.efficiency_factor = 0.0;
    let body = json!({ "refrigerant": "R134a", "evap_temp_c": -10.0, "cond_temp_c": 45.0 });
    let resp = dispatch("cycle/standard", &body, &cfg);
    assert_eq!(resp.status, 500);
    assert!(error_of(&resp).starts_with("Server configuration error"));
    // 알 수 없는 엔드포인트는 설정과 무관하게 404.
    assert_eq!(dispatch("nope", &body, &cfg).status, 404);
}
