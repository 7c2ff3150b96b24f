use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_MANUAL_AUDIT: &str = "main_menu.manual_audit";
    pub const MAIN_MENU_BATCH_AUDIT: &str = "main_menu.batch_audit";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MANUAL_HEADING: &str = "manual.heading";
    pub const MANUAL_PROMPT_FIELD: &str = "manual.prompt_field";

    pub const BATCH_HEADING: &str = "batch.heading";
    pub const BATCH_PROMPT_PATH: &str = "batch.prompt_path";
    pub const BATCH_PROMPT_EXPORT: &str = "batch.prompt_export";
    pub const BATCH_EXPORTED: &str = "batch.exported";

    pub const REPORT_METRICS_HEADING: &str = "report.metrics_heading";
    pub const REPORT_RECOMMENDATIONS_HEADING: &str = "report.recommendations_heading";
    pub const REPORT_AGGREGATE_HEADING: &str = "report.aggregate_heading";
    pub const REPORT_PROCESSED: &str = "report.processed";
    pub const REPORT_EXCLUDED: &str = "report.excluded";
    pub const REPORT_EXCLUDED_ROW: &str = "report.excluded_row";
    pub const REPORT_EXCLUDED_COLUMN: &str = "report.excluded_column";
    pub const REPORT_DEGENERATE: &str = "report.degenerate";
    pub const REPORT_SPREAD_HEADING: &str = "report.spread_heading";
    pub const REPORT_SPREAD_ROW: &str = "report.spread_row";
    pub const REPORT_TALLY_HEADING: &str = "report.tally_heading";
    pub const REPORT_TALLY_ROW: &str = "report.tally_row";
    pub const REPORT_MASKING_NOTE: &str = "report.masking_note";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_CURRENT_FACTOR: &str = "settings.current_factor";
    pub const SETTINGS_PROMPT_FACTOR: &str = "settings.prompt_factor";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_INVALID: &str = "settings.invalid";

    pub const REC_AVG_PREFIX: &str = "rec.avg_prefix";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에서만 키를 조회한다.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾고, 모두 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        if let Some(v) = self.lookup(key) {
            return Cow::Borrowed(v);
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        Cow::Borrowed(builtin.unwrap_or(key))
    }

    /// 템플릿 `{name}` 자리에 값을 채운 번역.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류:",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 석탄화력 에너지 감사 ===",
        MAIN_MENU_MANUAL_AUDIT => "1) 수동 감사",
        MAIN_MENU_BATCH_AUDIT => "2) CSV 배치 감사",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MANUAL_HEADING => "\n-- 수동 감사 --",
        MANUAL_PROMPT_FIELD => "{label} [{unit}]: ",
        BATCH_HEADING => "\n-- CSV 배치 감사 --",
        BATCH_PROMPT_PATH => "CSV 파일 경로: ",
        BATCH_PROMPT_EXPORT => "결과 저장 경로 (엔터={default}, '-'=저장 안 함): ",
        BATCH_EXPORTED => "결과를 저장했습니다: {path}",
        REPORT_METRICS_HEADING => "\n[주요 지표]",
        REPORT_RECOMMENDATIONS_HEADING => "\n[성능 권고]",
        REPORT_AGGREGATE_HEADING => "\n[배치 평균 지표]",
        REPORT_PROCESSED => "처리된 행: {count}",
        REPORT_EXCLUDED => "제외된 행: {count}",
        REPORT_EXCLUDED_ROW => "  - {line}행: {columns}",
        REPORT_EXCLUDED_COLUMN => "  * {column}: {count}행",
        REPORT_DEGENERATE => "0-가드 적용 행(연료 열량 또는 출력 0): {count}",
        REPORT_SPREAD_HEADING => "\n[지표 분포]",
        REPORT_SPREAD_ROW => "{label}: 평균 {mean}, 최소 {min}, 최대 {max}, 표준편차 {std}",
        REPORT_TALLY_HEADING => "\n[행별 판정 집계]",
        REPORT_TALLY_ROW => "{label}: 양호 {good}, 주의 {warning}, 위험 {critical}",
        REPORT_MASKING_NOTE => "참고: 권고는 평균값 기준이므로 행별 편차가 가려질 수 있습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어: {lang}",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en, 엔터=유지): ",
        SETTINGS_CURRENT_FACTOR => "현재 CO2 배출계수: {factor} kg/kg",
        SETTINGS_PROMPT_FACTOR => "새 배출계수 (엔터=유지): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SETTINGS_INVALID => "잘못된 값이므로 변경하지 않습니다.",
        "field.coal_flow" => "석탄 투입량",
        "field.gcv" => "석탄 발열량(GCV)",
        "field.steam_flow" => "증기 발생량",
        "field.steam_enthalpy" => "증기 엔탈피",
        "field.feedwater_enthalpy" => "급수 엔탈피",
        "field.power_output" => "발전 출력",
        "field.flue_temp" => "배가스 온도",
        "field.ambient_temp" => "외기 온도",
        "indicator.boiler_efficiency" => "보일러 효율",
        "indicator.heat_rate" => "열소비율",
        "indicator.sfc" => "연료 원단위",
        "indicator.flue_gas_loss" => "배가스 손실",
        "indicator.co2" => "CO₂ 배출량",
        "severity.good" => "양호",
        "severity.warning" => "주의",
        "severity.critical" => "위험",
        REC_AVG_PREFIX => "평균:",
        "rec.boiler_efficiency.good" => "우수. 현재 운전을 유지하고 정기 점검을 계획하세요.",
        "rec.boiler_efficiency.warning" => "개선 여지 있음. 과잉공기를 최적화하고 전열면을 청소(수트 블로잉)하세요.",
        "rec.boiler_efficiency.critical" => "비효율. 불완전 연소, 탄질, 누설, 튜브 파울링을 점검하고 절탄기나 보온 보강을 검토하세요.",
        "rec.heat_rate.good" => "효율적. 부하 관리를 유지하고 설비를 튜닝 상태로 유지하세요.",
        "rec.heat_rate.warning" => "보통. 터빈 실링, 복수기 진공, 재열기 손실을 점검하세요.",
        "rec.heat_rate.critical" => "비효율. 열교환기와 터빈 성능, 복수기 진공, 소내 보조동력을 감사하세요.",
        "rec.sfc.good" => "효율적. 탄질을 일정하게 관리하고 급탄 계통을 유지하세요.",
        "rec.sfc.warning" => "허용 범위. 공연비를 확인하고 미연탄소를 줄이세요.",
        "rec.sfc.critical" => "높음. 탄질 개선, 연소 튜닝, 클링커 저감을 권장합니다.",
        "rec.flue_gas_loss.good" => "배가스 열회수 양호. 배기 온도와 공기비를 계속 감시하세요.",
        "rec.flue_gas_loss.warning" => "중간 손실. 연소용 공기 예열이나 절탄기 열회수를 검토하세요.",
        "rec.flue_gas_loss.critical" => "열손실 큼. 배가스 열회수 설비 설치, 과잉공기 저감, 보온 누설 점검이 시급합니다.",
        "rec.co2.good" => "CO₂ 배출량을 정기적으로 감시하고 저감 기회를 찾으세요.",
        "rec.co2.warning" => "CO₂ 배출량이 높습니다. 청정 연료나 탄소 포집을 검토하세요.",
        _ => return gui_ko(key),
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error:",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Coal Power Plant Energy Audit ===",
        MAIN_MENU_MANUAL_AUDIT => "1) Manual audit",
        MAIN_MENU_BATCH_AUDIT => "2) CSV batch audit",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MANUAL_HEADING => "\n-- Manual Audit --",
        MANUAL_PROMPT_FIELD => "{label} [{unit}]: ",
        BATCH_HEADING => "\n-- CSV Batch Audit --",
        BATCH_PROMPT_PATH => "CSV file path: ",
        BATCH_PROMPT_EXPORT => "Export path (enter={default}, '-'=skip): ",
        BATCH_EXPORTED => "Results written to {path}",
        REPORT_METRICS_HEADING => "\n[Key Metrics]",
        REPORT_RECOMMENDATIONS_HEADING => "\n[Performance Recommendations]",
        REPORT_AGGREGATE_HEADING => "\n[Batch Average Metrics]",
        REPORT_PROCESSED => "Rows processed: {count}",
        REPORT_EXCLUDED => "Rows excluded: {count}",
        REPORT_EXCLUDED_ROW => "  - line {line}: {columns}",
        REPORT_EXCLUDED_COLUMN => "  * {column}: {count} rows",
        REPORT_DEGENERATE => "Rows with zero heat input or power output (guarded to 0): {count}",
        REPORT_SPREAD_HEADING => "\n[Metric Spread]",
        REPORT_SPREAD_ROW => "{label}: mean {mean}, min {min}, max {max}, std dev {std}",
        REPORT_TALLY_HEADING => "\n[Per-row Verdicts]",
        REPORT_TALLY_ROW => "{label}: good {good}, warning {warning}, critical {critical}",
        REPORT_MASKING_NOTE => "Note: recommendations use the batch mean and can hide per-row variance.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language: {lang}",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en, enter=keep): ",
        SETTINGS_CURRENT_FACTOR => "Current CO2 emission factor: {factor} kg/kg",
        SETTINGS_PROMPT_FACTOR => "New emission factor (enter=keep): ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_INVALID => "Invalid value; unchanged.",
        "field.coal_flow" => "Coal Flow",
        "field.gcv" => "Coal GCV",
        "field.steam_flow" => "Steam Flow",
        "field.steam_enthalpy" => "Steam Enthalpy",
        "field.feedwater_enthalpy" => "Feedwater Enthalpy",
        "field.power_output" => "Power Output",
        "field.flue_temp" => "Flue Gas Temp",
        "field.ambient_temp" => "Ambient Temp",
        "indicator.boiler_efficiency" => "Boiler Efficiency",
        "indicator.heat_rate" => "Plant Heat Rate",
        "indicator.sfc" => "Specific Fuel Consumption",
        "indicator.flue_gas_loss" => "Flue Gas Loss",
        "indicator.co2" => "CO₂ Emissions",
        "severity.good" => "good",
        "severity.warning" => "warning",
        "severity.critical" => "critical",
        REC_AVG_PREFIX => "Avg:",
        "rec.boiler_efficiency.good" => "Excellent. Maintain current operation and schedule routine maintenance.",
        "rec.boiler_efficiency.warning" => "Room for improvement. Optimize excess air supply, clean heat transfer surfaces (soot blowing).",
        "rec.boiler_efficiency.critical" => "Inefficient. Check for incomplete combustion, poor coal quality, leaks and tube fouling. Consider economizers or better insulation.",
        "rec.heat_rate.good" => "Efficient. Maintain load management and keep equipment tuned.",
        "rec.heat_rate.warning" => "Average. Inspect turbine sealing, condenser vacuum and reheater losses.",
        "rec.heat_rate.critical" => "Inefficient. Audit heat exchangers, turbine performance, condenser vacuum and auxiliary consumption.",
        "rec.sfc.good" => "Efficient. Ensure consistent coal quality and maintain feed systems.",
        "rec.sfc.warning" => "Acceptable. Verify air-fuel ratio, minimize unburnt carbon.",
        "rec.sfc.critical" => "High. Improve coal quality, tune combustion and reduce clinker formation.",
        "rec.flue_gas_loss.good" => "Optimal flue gas recovery. Keep stack temperature and air ratio monitored.",
        "rec.flue_gas_loss.warning" => "Moderate loss. Consider preheating combustion air or an economizer.",
        "rec.flue_gas_loss.critical" => "High heat loss. Install flue gas heat recovery, reduce excess air, check insulation leaks.",
        "rec.co2.good" => "Monitor CO₂ emissions regularly and explore opportunities for reduction.",
        "rec.co2.warning" => "High CO₂ emissions. Explore cleaner fuels or carbon capture.",
        _ => return gui_en(key),
    })
}

fn gui_ko(key: &str) -> Option<&'static str> {
    Some(match key {
        "gui.app_title" => "석탄화력 에너지 감사 도구",
        "gui.tab.manual" => "수동 감사",
        "gui.tab.batch" => "배치 감사",
        "gui.nav.heading" => "메뉴",
        "gui.settings.title" => "설정",
        "gui.settings.lang" => "언어",
        "gui.settings.lang.auto" => "시스템",
        "gui.settings.factor" => "CO₂ 배출계수 [kg/kg]",
        "gui.settings.alpha" => "창 투명도",
        "gui.settings.save" => "설정 저장",
        "gui.settings.saved" => "저장했습니다.",
        "gui.formula.button" => "계산식",
        "gui.formula.title" => "계산식 참고",
        "gui.formula.efficiency" => "보일러 효율 = 증기유량 × (증기 엔탈피 − 급수 엔탈피) / (석탄량 × GCV) × 100",
        "gui.formula.heat_rate" => "열소비율 = 석탄량 × GCV / 출력, 연료 원단위 = 석탄량 / 출력",
        "gui.formula.flue" => "배가스 손실 = (배가스 온도 − 외기 온도) × 0.24 × 1.5 × 석탄량 / 투입 열량 × 100",
        "gui.formula.co2" => "CO₂ = 석탄량 × 배출계수",
        "gui.formula.guard" => "분모가 0이면 해당 지표는 0으로 표시됩니다.",
        "gui.manual.heading" => "플랜트 입력값",
        "gui.manual.run" => "감사 실행",
        "gui.manual.results" => "계산 결과",
        "gui.batch.heading" => "CSV 배치 감사",
        "gui.batch.open" => "CSV 열기",
        "gui.batch.export" => "결과 CSV 저장",
        "gui.batch.no_file" => "선택된 파일이 없습니다.",
        "gui.batch.preview" => "결과 미리보기 (최대 {count}행)",
        "gui.batch.excluded" => "제외된 행",
        "gui.recommendations" => "성능 권고",
        "gui.column.metric" => "지표",
        "gui.column.value" => "값",
        "gui.column.line" => "행",
        _ => return None,
    })
}

fn gui_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "gui.app_title" => "Coal Power Plant Energy Audit",
        "gui.tab.manual" => "Manual Audit",
        "gui.tab.batch" => "Batch Audit",
        "gui.nav.heading" => "Menu",
        "gui.settings.title" => "Settings",
        "gui.settings.lang" => "Language",
        "gui.settings.lang.auto" => "System",
        "gui.settings.factor" => "CO₂ emission factor [kg/kg]",
        "gui.settings.alpha" => "Window transparency",
        "gui.settings.save" => "Save settings",
        "gui.settings.saved" => "Saved.",
        "gui.formula.button" => "Formulas",
        "gui.formula.title" => "Formula reference",
        "gui.formula.efficiency" => "Boiler efficiency = steam flow × (h_steam − h_feed) / (coal flow × GCV) × 100",
        "gui.formula.heat_rate" => "Heat rate = coal flow × GCV / power, SFC = coal flow / power",
        "gui.formula.flue" => "Flue gas loss = (T_flue − T_amb) × 0.24 × 1.5 × coal flow / heat input × 100",
        "gui.formula.co2" => "CO₂ = coal flow × emission factor",
        "gui.formula.guard" => "A zero denominator shows the dependent metric as 0.",
        "gui.manual.heading" => "Plant input parameters",
        "gui.manual.run" => "Run audit",
        "gui.manual.results" => "Calculated results",
        "gui.batch.heading" => "CSV Batch Audit",
        "gui.batch.open" => "Open CSV",
        "gui.batch.export" => "Save results CSV",
        "gui.batch.no_file" => "No file selected.",
        "gui.batch.preview" => "Result preview (up to {count} rows)",
        "gui.batch.excluded" => "Excluded rows",
        "gui.recommendations" => "Performance recommendations",
        "gui.column.metric" => "Metric",
        "gui.column.value" => "Value",
        "gui.column.line" => "Line",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_strings_normalize_to_base_language() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-US").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("de_DE"), None);
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en", Some("ko")), "en");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.t("severity.good"), "good");
    }

    #[test]
    fn pack_overrides_builtin_strings() {
        let map = parse_toml_to_map("[severity]\ngood = \"fine\"\n").unwrap();
        let tr = Translator {
            lang: Language::En,
            overrides: Some(map),
        };
        assert_eq!(tr.t("severity.good"), "fine");
        assert_eq!(tr.t("severity.warning"), "warning");
    }
}
