//! 냉매 안전 관련 계산 모듈 모음.

pub mod a2l;

pub use a2l::{
    a2l_charge_limit, a2l_charge_limit_checked, min_area_for_a2l, min_area_for_a2l_checked,
    A2lChargeInputs, A2lError, InstallHeight,
};
