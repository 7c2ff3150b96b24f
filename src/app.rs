use std::path::Path;

use crate::batch::{self, BatchReport};
use crate::config::{Config, ConfigError};
use crate::error::AuditError;
use crate::export;
use crate::i18n::{self, keys, Translator};
use crate::measurement::MeasurementRecord;
use crate::metrics::{self, MetricsRecord};
use crate::recommend::{self, Recommendation};
use crate::report;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("감사 오류: {0}")]
    Audit(#[from] AuditError),
}

/// 수동 감사 한 건의 결과. 화면 재그리기 사이에 호출자가 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleAudit {
    pub measurement: MeasurementRecord,
    pub metrics: MetricsRecord,
    pub recommendations: Vec<Recommendation>,
}

pub fn audit_single(measurement: MeasurementRecord, emission_factor: f64) -> SingleAudit {
    let metrics = metrics::compute_with_factor(&measurement, emission_factor);
    if measurement.has_degenerate_division() {
        tracing::debug!("zero denominator in manual audit, dependent metrics set to 0");
    }
    SingleAudit {
        measurement,
        recommendations: recommend::recommend(&metrics),
        metrics,
    }
}

/// 단일 감사를 실행하고 보고서를 출력한다.
pub fn run_single(cfg: &Config, tr: &Translator, measurement: MeasurementRecord) {
    let audit = audit_single(measurement, cfg.emission_factor_kg_per_kg);
    println!(
        "{}",
        report::render_single(tr, &audit.metrics, &audit.recommendations)
    );
}

/// 배치 감사를 실행해 보고서를 출력하고, 경로가 주어지면 결과 CSV를 쓴다.
pub fn run_batch(
    cfg: &Config,
    tr: &Translator,
    input: &Path,
    export_to: Option<&Path>,
) -> Result<BatchReport, AppError> {
    let report = batch::audit_path(input, cfg.emission_factor_kg_per_kg)?;
    println!("{}", report::render_batch(tr, &report));
    if let Some(out) = export_to {
        export::write_csv_file(&report, out)?;
        println!(
            "{}",
            tr.fill(keys::BATCH_EXPORTED, &[("path", out.display().to_string())])
        );
    }
    Ok(report)
}

/// 설정에서 번역기를 만든다. `cli_lang`이 auto면 설정/시스템 로케일을 따른다.
pub fn translator_for(cfg: &Config, cli_lang: &str) -> Translator {
    let code = i18n::resolve_language(cli_lang, Some(cfg.language.as_str()));
    Translator::new_with_pack(&code, cfg.language_pack_dir.as_deref())
}

/// CLI 대화형 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::ManualAudit => {
                let measurement = ui_cli::read_measurement(tr)?;
                run_single(config, tr, measurement);
            }
            MenuChoice::BatchAudit => {
                let (input, export_to) = ui_cli::read_batch_paths(tr, config)?;
                // 배치 오류는 메뉴로 돌아가 다시 시도할 수 있게 출력만 한다.
                if let Err(err) = run_batch(config, tr, &input, export_to.as_deref()) {
                    tracing::error!("batch audit failed: {err}");
                    println!("{} {err}", tr.t(keys::ERROR_PREFIX));
                }
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    *tr = translator_for(config, "auto");
                }
                config.save()?;
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
