#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use biomass_calculator::{
    config,
    dataset::{display_columns, Row},
    display::{self, FormulaSegment},
    number::format_number,
    session::Session,
    workbook,
};
use eframe::{egui, App, Frame};
use rfd::FileDialog;
use std::{fs, path::PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        config::Config::default()
    });
    let cfg = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Biomass Calculator",
        cfg,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

struct GuiApp {
    config: config::Config,
    session: Session,
    // 업로드: 파일 선택 시 바이트를 읽고, Upload 버튼에서 파싱한다
    picked_file: Option<PathBuf>,
    file_bytes: Option<Vec<u8>>,
    upload_error: Option<String>,
    // 추출 입력
    name_input: String,
    id_input: String,
    // 유량 입력
    power_input: String,
    efficiency_input: String,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let power_input = config.defaults.power_mw.map(format_number).unwrap_or_default();
        let efficiency_input = config.defaults.efficiency.map(format_number).unwrap_or_default();
        Self {
            config,
            session: Session::new(),
            picked_file: None,
            file_bytes: None,
            upload_error: None,
            name_input: String::new(),
            id_input: String::new(),
            power_input,
            efficiency_input,
        }
    }

    fn pick_file(&mut self) {
        let mut dialog = FileDialog::new().add_filter("Spreadsheet", &["xlsx", "xlsm", "xls", "ods"]);
        if let Some(dir) = self.config.last_workbook.as_ref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };
        self.upload_error = None;
        match fs::read(&path) {
            Ok(bytes) => {
                self.file_bytes = Some(bytes);
                self.picked_file = Some(path);
            }
            Err(e) => self.upload_error = Some(format!("{}: {e}", path.display())),
        }
    }

    fn upload(&mut self) {
        let Some(bytes) = self.file_bytes.clone() else {
            return;
        };
        match workbook::read_first_sheet_from_bytes(bytes, &self.config.columns) {
            Ok(dataset) => {
                self.upload_error = None;
                self.session.load_dataset(dataset);
                self.config.last_workbook = self.picked_file.clone();
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "config save failed");
                }
            }
            Err(e) => self.upload_error = Some(e.to_string()),
        }
    }

    fn ui_upload(&mut self, ui: &mut egui::Ui) {
        ui.heading("Biomass data");
        ui.horizontal(|ui| {
            if ui.button("Choose file...").clicked() {
                self.pick_file();
            }
            match &self.picked_file {
                Some(path) => ui.label(path.display().to_string()),
                None => ui.weak("No file chosen"),
            };
            let ready = self.file_bytes.is_some();
            if ui.add_enabled(ready, egui::Button::new("Upload")).clicked() {
                self.upload();
            }
        });
        if let Some(err) = &self.upload_error {
            ui.colored_label(ui.visuals().error_fg_color, err.as_str());
        }
    }

    fn ui_extract(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("extract_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.name_input).hint_text("Enter biomass name"),
                );
                if ui.button("Extract Data by Name").clicked() {
                    self.session.filter_by_name(&self.name_input);
                }
                ui.end_row();
                ui.add(egui::TextEdit::singleline(&mut self.id_input).hint_text("Enter biomass id"));
                if ui.button("Extract Data by ID").clicked() {
                    self.session.filter_by_id(&self.id_input);
                }
                ui.end_row();
            });
    }

    fn ui_filtered(&mut self, ui: &mut egui::Ui) {
        if self.session.filtered().is_empty() {
            return;
        }
        ui.add_space(8.0);
        ui.heading("Filtered Data");
        rows_table(ui, "filtered_table", self.session.filtered());
        if ui.button("Calculer la formule théorique de biomasse").clicked() {
            self.session.compute_formula();
        }
    }

    fn ui_formula(&mut self, ui: &mut egui::Ui) {
        let (Some(formula), Some(equation)) = (self.session.formula(), self.session.equation())
        else {
            return;
        };
        let formula = formula.as_str().to_string();
        let equation = equation.to_string();

        ui.add_space(8.0);
        ui.heading("Calculated Empirical Formula");
        formula_label(ui, &formula);
        ui.heading("Combustion Equation");
        formula_label(ui, &equation);

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Calculate Debit Massique");
            egui::Grid::new("flow_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Puissance en MW:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.power_input)
                            .hint_text("Enter P (energy)"),
                    );
                    ui.end_row();
                    ui.label("Rendement:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.efficiency_input)
                            .hint_text("Enter r (efficiency)"),
                    );
                    ui.end_row();
                });
            ui.label(display::lhv_line(self.session.lhv_mj_per_kg()));
            if ui.button("Calculate Debit Massique").clicked() {
                self.session
                    .compute_flows(&self.power_input, &self.efficiency_input);
            }
            if let Some(flows) = self.session.flows() {
                for (label, value) in display::flow_lines(flows) {
                    ui.strong(format!("{label}: {value}"));
                }
            }
        });
    }

    fn ui_raw(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        match self.session.dataset() {
            Some(ds) if !ds.is_empty() => {
                ui.heading("Original Excel Data");
                if !ds.issues.is_empty() {
                    ui.weak(format!("{} row(s) missing required columns", ds.issues.len()));
                }
                rows_table(ui, "raw_table", &ds.rows);
            }
            _ => {
                ui.label("No file uploaded");
            }
        }
    }
}

fn rows_table(ui: &mut egui::Ui, id: &str, rows: &[Row]) {
    let columns = display_columns(rows);
    egui::ScrollArea::horizontal().id_source(("scroll", id)).show(ui, |ui| {
        egui::Grid::new(id).striped(true).spacing([16.0, 4.0]).show(ui, |ui| {
            for column in &columns {
                ui.strong(column.as_str());
            }
            ui.end_row();
            for row in rows {
                for column in &columns {
                    ui.label(row.get(column).map(ToString::to_string).unwrap_or_default());
                }
                ui.end_row();
            }
        });
    });
}

/// 원소 뒤 숫자를 아래 첨자로 그린다.
fn formula_label(ui: &mut egui::Ui, formula: &str) {
    let color = ui.visuals().text_color();
    let body = egui::TextStyle::Body.resolve(ui.style());
    let small = egui::FontId::new(body.size * 0.7, body.family.clone());
    let mut job = egui::text::LayoutJob::default();
    for segment in display::formula_segments(formula) {
        match segment {
            FormulaSegment::Text(text) => {
                job.append(&text, 0.0, egui::TextFormat::simple(body.clone(), color));
            }
            FormulaSegment::Subscript(count) => job.append(
                &count,
                0.0,
                egui::TextFormat {
                    font_id: small.clone(),
                    color,
                    valign: egui::Align::BOTTOM,
                    ..Default::default()
                },
            ),
        }
    }
    ui.label(job);
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_upload(ui);
                    ui.separator();
                    self.ui_extract(ui);
                    self.ui_filtered(ui);
                    self.ui_formula(ui);
                    ui.separator();
                    self.ui_raw(ui);
                });
        });
    }
}
