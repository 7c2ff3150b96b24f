//! 석탄화력 발전소 성능/배출 지표 계산과 정비 권고 엔진.
//! 핵심 계산은 입출력 없는 순수 함수이며 CLI와 GUI가 같은 라이브러리를 공유한다.

pub mod aggregate;
pub mod app;
pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod measurement;
pub mod metrics;
pub mod observability;
pub mod recommend;
pub mod report;
pub mod ui_cli;

pub use error::AuditError;
pub use measurement::{Field, MeasurementDraft, MeasurementRecord};
pub use metrics::{compute, compute_with_factor, Indicator, MetricsRecord, EMISSION_FACTOR};
pub use recommend::{recommend, recommend_aggregate, Recommendation, Severity};
