// src/config/consts.rs

// Net config
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const USER_AGENT: &str = concat!("ecourts_desk/", env!("CARGO_PKG_VERSION"));

// Env overrides
pub const API_URL_ENV: &str = "ECOURTS_API_URL";
pub const OUT_DIR_ENV: &str = "ECOURTS_OUT_DIR";
pub const TIMEOUT_ENV: &str = "ECOURTS_TIMEOUT_SECS";
pub const LOG_ENV: &str = "ECOURTS_LOG";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_OUT_DIR: &str = "downloads";

// Search form defaults
pub const DEFAULT_CNR: &str = "DLHI010001232024";
pub const DEFAULT_CASE_TYPE: &str = "CIVIL";
pub const DEFAULT_CASE_NUMBER: &str = "123";
pub const DEFAULT_CASE_YEAR: &str = "2024";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
