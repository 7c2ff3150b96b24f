use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::metrics::EMISSION_FACTOR;

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en)
    pub language: String,
    /// 외부 언어팩 디렉터리. 없으면 내장 문자열만 사용한다.
    pub language_pack_dir: Option<String>,
    /// CO2 배출계수 [kg CO2/kg coal]
    pub emission_factor_kg_per_kg: f64,
    /// 배치 결과 내보내기 기본 파일명
    pub export_file_name: String,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            emission_factor_kg_per_kg: EMISSION_FACTOR,
            export_file_name: "audit_results.csv".into(),
            window_alpha: 1.0,
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("배출계수는 0보다 큰 유한한 값이어야 합니다: {0}")]
    InvalidEmissionFactor(f64),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(DEFAULT_CONFIG_PATH)
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "created default config");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

/// TOML 문자열을 설정으로 해석한다. 빠진 키는 기본값을 쓴다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    validate_emission_factor(cfg.emission_factor_kg_per_kg)?;
    Ok(cfg)
}

pub fn validate_emission_factor(value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEmissionFactor(value))
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        save_config(self, path)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = parse("language = \"en\"\n").unwrap();
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.emission_factor_kg_per_kg, EMISSION_FACTOR);
        assert_eq!(cfg.export_file_name, "audit_results.csv");
    }

    #[test]
    fn rejects_non_positive_emission_factor() {
        let err = parse("emission_factor_kg_per_kg = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEmissionFactor(_)));
    }

    #[test]
    fn toml_round_trip_keeps_values() {
        let cfg = Config {
            emission_factor_kg_per_kg: 2.29,
            language_pack_dir: Some("locales".into()),
            ..Config::default()
        };
        let back = parse(&cfg.to_toml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
