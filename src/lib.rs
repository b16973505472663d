//! 냉동 사이클·A2L 충전량·공기측 계산 로직을 라이브러리로 분리하여
//! CLI 뿐 아니라 JSON 핸들러(`api`)에서도 그대로 쓸 수 있게 한다.

pub mod airside;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod cycle;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod refrigerant;
pub mod safety;
pub mod ui_cli;
pub mod units;
