#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use coal_plant_audit::{
    app::{self, SingleAudit},
    batch::{self, BatchReport},
    config, export,
    i18n::{self, keys, Translator},
    measurement::{Field, MeasurementRecord},
    metrics::Indicator,
    observability,
    recommend::{Recommendation, Scope, Severity},
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path, path::PathBuf};

/// 결과 미리보기에 보여 줄 최대 행 수.
const PREVIEW_ROWS: usize = 200;

/// 수동 감사 화면의 초기 입력값.
const MANUAL_DEFAULTS: MeasurementRecord = MeasurementRecord {
    coal_flow: 100.0,
    gcv: 5000.0,
    steam_flow: 400.0,
    steam_enthalpy: 750.0,
    feedwater_enthalpy: 100.0,
    power_output: 200.0,
    flue_temp: 150.0,
    ambient_temp: 25.0,
};

fn main() -> Result<(), eframe::Error> {
    observability::init_tracing();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 760.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Coal Power Plant Energy Audit",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다.
/// 1) assets/fonts/ 아래 사용자 폰트
/// 2) Windows/macOS/Linux 시스템 폰트
/// 모두 실패하면 기본 폰트를 유지하고 Err를 반환한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
        PathBuf::from("assets/fonts/malgun.ttf"),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );

    for p in candidates.iter().filter(|p| p.exists()) {
        let bytes = fs::read(p).map_err(|e| format!("failed to read font ({}): {e}", p.display()))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        tracing::debug!(font = %p.display(), "font loaded");
        return Ok(());
    }
    Err("no Korean-capable font found; Hangul labels may not render".into())
}

fn severity_color(ui: &egui::Ui, severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Good => egui::Color32::from_rgb(46, 160, 67),
        Severity::Warning => ui.visuals().warn_fg_color,
        Severity::Critical => ui.visuals().error_fg_color,
    }
}

fn recommendations_ui(ui: &mut egui::Ui, tr: &Translator, recs: &[Recommendation], scope: Scope) {
    for rec in recs {
        let color = severity_color(ui, rec.severity);
        ui.colored_label(color, rec.message(tr, scope));
    }
}

fn field_mut(record: &mut MeasurementRecord, field: Field) -> &mut f64 {
    match field {
        Field::CoalFlow => &mut record.coal_flow,
        Field::Gcv => &mut record.gcv,
        Field::SteamFlow => &mut record.steam_flow,
        Field::SteamEnthalpy => &mut record.steam_enthalpy,
        Field::FeedwaterEnthalpy => &mut record.feedwater_enthalpy,
        Field::PowerOutput => &mut record.power_output,
        Field::FlueTemp => &mut record.flue_temp,
        Field::AmbientTemp => &mut record.ambient_temp,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    Manual,
    Batch,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    tab: Tab,
    lang_input: String,
    factor_input: f64,
    window_alpha: f32,
    settings_status: Option<String>,
    show_settings_modal: bool,
    show_formula_modal: bool,
    // 수동 감사
    manual_input: MeasurementRecord,
    manual_result: Option<SingleAudit>,
    // 배치 감사
    batch_path: Option<PathBuf>,
    batch_report: Option<BatchReport>,
    batch_error: Option<String>,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let tr = app::translator_for(&config, "auto");
        tracing::info!(lang = tr.language_code(), "GUI language resolved");
        Self {
            tr,
            tab: Tab::Manual,
            lang_input: config.language.clone(),
            factor_input: config.emission_factor_kg_per_kg,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            settings_status: None,
            show_settings_modal: false,
            show_formula_modal: false,
            manual_input: MANUAL_DEFAULTS,
            manual_result: None,
            batch_path: None,
            batch_report: None,
            batch_error: None,
            export_status: None,
            config,
        }
    }

    fn run_manual_audit(&mut self) {
        self.manual_result = Some(app::audit_single(
            self.manual_input,
            self.config.emission_factor_kg_per_kg,
        ));
    }

    fn load_batch(&mut self, path: PathBuf) {
        self.export_status = None;
        match batch::audit_path(&path, self.config.emission_factor_kg_per_kg) {
            Ok(report) => {
                self.batch_report = Some(report);
                self.batch_error = None;
            }
            Err(e) => {
                tracing::warn!("batch audit failed: {e}");
                self.batch_report = None;
                self.batch_error = Some(e.to_string());
            }
        }
        self.batch_path = Some(path);
    }

    fn export_batch(&mut self) {
        let Some(report) = &self.batch_report else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(&self.config.export_file_name)
            .save_file()
        else {
            return;
        };
        self.export_status = Some(match export::write_csv_file(report, &path) {
            Ok(()) => self
                .tr
                .fill(keys::BATCH_EXPORTED, &[("path", path.display().to_string())]),
            Err(e) => format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        match config::validate_emission_factor(self.factor_input) {
            Ok(v) => self.config.emission_factor_kg_per_kg = v,
            Err(e) => {
                self.settings_status = Some(e.to_string());
                return;
            }
        }
        self.tr = app::translator_for(&self.config, "auto");
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t("gui.settings.saved").into_owned(),
            Err(e) => format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.tr.t("gui.nav.heading").into_owned());
            ui.add_space(8.0);
        });
        for (tab, key) in [(Tab::Manual, "gui.tab.manual"), (Tab::Batch, "gui.tab.batch")] {
            let selected = self.tab == tab;
            let button = egui::Button::new(self.tr.t(key).into_owned())
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_manual(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t("gui.manual.heading").into_owned());
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("manual_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in Field::ALL {
                        ui.label(tr.t(field.label_key()).into_owned());
                        ui.add(egui::DragValue::new(field_mut(&mut self.manual_input, field)).speed(1.0));
                        ui.label(field.unit());
                        ui.end_row();
                    }
                });
            if ui.button(tr.t("gui.manual.run").into_owned()).clicked() {
                self.run_manual_audit();
            }
        });

        let Some(result) = &self.manual_result else {
            return;
        };
        ui.add_space(12.0);
        ui.heading(tr.t("gui.manual.results").into_owned());
        metrics_grid(ui, &tr, "manual_results", |i| result.metrics.formatted(i));
        let efficiency = (result.metrics.boiler_efficiency / 100.0).clamp(0.0, 1.0) as f32;
        ui.add(
            egui::ProgressBar::new(efficiency)
                .text(format!("{} {}%", tr.t("indicator.boiler_efficiency"), result.metrics.formatted(Indicator::BoilerEfficiency))),
        );
        ui.add_space(8.0);
        ui.heading(tr.t("gui.recommendations").into_owned());
        recommendations_ui(ui, &tr, &result.recommendations, Scope::Single);
    }

    fn ui_batch(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t("gui.batch.heading").into_owned());
        ui.horizontal(|ui| {
            if ui.button(tr.t("gui.batch.open").into_owned()).clicked() {
                if let Some(path) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
                    self.load_batch(path);
                }
            }
            if ui
                .add_enabled(self.batch_report.is_some(), egui::Button::new(tr.t("gui.batch.export").into_owned()))
                .clicked()
            {
                self.export_batch();
            }
        });
        match &self.batch_path {
            Some(p) => ui.label(p.display().to_string()),
            None => ui.label(tr.t("gui.batch.no_file").into_owned()),
        };
        if let Some(msg) = &self.export_status {
            ui.label(msg.as_str());
        }
        if let Some(err) = &self.batch_error {
            ui.colored_label(ui.visuals().error_fg_color, format!("{} {err}", tr.t(keys::ERROR_PREFIX)));
        }

        let Some(report) = &self.batch_report else {
            return;
        };
        ui.separator();
        ui.label(tr.fill(keys::REPORT_PROCESSED, &[("count", report.processed().to_string())]));
        ui.label(tr.fill(keys::REPORT_EXCLUDED, &[("count", report.excluded.len().to_string())]));
        if report.degenerate_rows > 0 {
            ui.label(tr.fill(keys::REPORT_DEGENERATE, &[("count", report.degenerate_rows.to_string())]));
        }
        if !report.excluded.is_empty() {
            egui::CollapsingHeader::new(tr.t("gui.batch.excluded").into_owned())
                .default_open(false)
                .show(ui, |ui| {
                    for row in &report.excluded {
                        ui.colored_label(ui.visuals().warn_fg_color, row.to_error().to_string());
                    }
                });
        }

        ui.add_space(8.0);
        ui.heading(tr.t(keys::REPORT_AGGREGATE_HEADING).into_owned().trim());
        metrics_grid(ui, &tr, "batch_average", |i| report.average.formatted(i));
        ui.colored_label(ui.visuals().weak_text_color(), tr.t(keys::REPORT_MASKING_NOTE).into_owned());

        ui.add_space(8.0);
        ui.heading(tr.t("gui.recommendations").into_owned());
        recommendations_ui(ui, &tr, &report.recommendations, Scope::Aggregate);

        ui.add_space(8.0);
        ui.heading(tr.t(keys::REPORT_TALLY_HEADING).into_owned().trim());
        egui::Grid::new("batch_tally").striped(true).show(ui, |ui| {
            ui.strong(tr.t("gui.column.metric").into_owned());
            for sev in Severity::ALL {
                ui.strong(tr.t(sev.label_key()).into_owned());
            }
            ui.end_row();
            for i in Indicator::ALL {
                ui.label(tr.t(i.label_key()).into_owned());
                for sev in Severity::ALL {
                    ui.label(report.tally.count(i, sev).to_string());
                }
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        ui.heading(tr.fill("gui.batch.preview", &[("count", PREVIEW_ROWS.to_string())]));
        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("batch_rows").striped(true).show(ui, |ui| {
                ui.strong(tr.t("gui.column.line").into_owned());
                for f in Field::ALL {
                    ui.strong(f.column());
                }
                for i in Indicator::ALL {
                    ui.strong(i.column());
                }
                ui.end_row();
                for row in report.rows.iter().take(PREVIEW_ROWS) {
                    ui.label(row.line.to_string());
                    for f in Field::ALL {
                        ui.label(row.measurement.get(f).to_string());
                    }
                    for i in Indicator::ALL {
                        ui.label(row.metrics.formatted(i));
                    }
                    ui.end_row();
                }
            });
        });
    }
}

fn metrics_grid(ui: &mut egui::Ui, tr: &Translator, id: &str, value: impl Fn(Indicator) -> String) {
    egui::Grid::new(id).striped(true).num_columns(2).show(ui, |ui| {
        ui.strong(tr.t("gui.column.metric").into_owned());
        ui.strong(tr.t("gui.column.value").into_owned());
        ui.end_row();
        for i in Indicator::ALL {
            ui.label(tr.t(i.label_key()).into_owned());
            ui.label(format!("{} {}", value(i), i.unit()));
            ui.end_row();
        }
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t("gui.app_title").into_owned());
                ui.separator();
                if ui.button(tr.t("gui.formula.button").into_owned()).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(tr.t("gui.settings.title").into_owned()).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            let mut open = true;
            let mut save = false;
            egui::Window::new(tr.t("gui.settings.title").into_owned())
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(tr.t("gui.settings.lang").into_owned());
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), tr.t("gui.settings.lang.auto").into_owned());
                            ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(tr.t("gui.settings.factor").into_owned());
                    ui.add(
                        egui::DragValue::new(&mut self.factor_input)
                            .speed(0.01)
                            .clamp_range(0.01..=10.0),
                    );
                    ui.separator();
                    ui.label(tr.t("gui.settings.alpha").into_owned());
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(tr.t("gui.settings.save").into_owned()).clicked() {
                        save = true;
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg.as_str());
                    }
                });
            if save {
                self.save_settings();
            }
            self.show_settings_modal = open;
        }

        if self.show_formula_modal {
            egui::Window::new(tr.t("gui.formula.title").into_owned())
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    for key in [
                        "gui.formula.efficiency",
                        "gui.formula.heat_rate",
                        "gui.formula.flue",
                        "gui.formula.co2",
                        "gui.formula.guard",
                    ] {
                        ui.label(tr.t(key).into_owned());
                    }
                });
        }

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Manual => self.ui_manual(ui),
                    Tab::Batch => self.ui_batch(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_defaults_reproduce_reference_audit() {
        let mut app = GuiApp::new(config::Config::default());
        assert!(app.manual_result.is_none());
        app.run_manual_audit();
        let result = app.manual_result.as_ref().unwrap();
        assert_eq!(result.metrics.formatted(Indicator::BoilerEfficiency), "52.00");
        assert_eq!(result.metrics.formatted(Indicator::HeatRate), "2500.00");
        assert_eq!(result.recommendations[0].severity, Severity::Critical);
        assert_eq!(result.recommendations[1].severity, Severity::Warning);
    }

    #[test]
    fn field_mut_targets_matching_field() {
        let mut record = MANUAL_DEFAULTS;
        for field in Field::ALL {
            *field_mut(&mut record, field) = -1.0;
            assert_eq!(record.get(field), -1.0);
        }
    }

    #[test]
    fn missing_batch_file_sets_error() {
        let mut app = GuiApp::new(config::Config::default());
        app.load_batch(PathBuf::from("definitely/missing/readings.csv"));
        assert!(app.batch_report.is_none());
        assert!(app.batch_error.is_some());
    }
}
