#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 변환기 진입점.

use eframe::{egui, App, Frame};
use engineering_unit_converter::{
    config::{self, Config},
    conversion::ConversionRequest,
    logging,
    quantity::QuantityKind,
};

fn main() -> Result<(), eframe::Error> {
    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}");
            Config::default()
        }
    };
    logging::init_tracing(&app_cfg.log_level);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 260.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Engineering Unit Converter",
        options,
        Box::new(move |_cc| Box::new(ConverterApp::new(app_cfg))),
    )
}

struct ConverterApp {
    config: Config,
    kind: QuantityKind,
    value: f64,
    from: String,
    to: String,
}

impl ConverterApp {
    fn new(config: Config) -> Self {
        let kind = config.default_quantity;
        let unit = config.default_units.label_for(kind).to_string();
        Self {
            kind,
            value: config.default_value,
            from: unit.clone(),
            to: unit,
            config,
        }
    }

    /// 물리량이 바뀌면 입력/출력 단위를 설정된 기본 단위로 되돌린다.
    fn reset_units(&mut self) {
        let unit = self.config.default_units.label_for(self.kind);
        self.from = unit.to_string();
        self.to = unit.to_string();
    }

    fn result_line(&self) -> Result<String, String> {
        ConversionRequest::new(self.kind, self.value, &self.from, &self.to)
            .evaluate()
            .map_err(|e| e.to_string())
    }
}

impl App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Engineering Unit Converter");
            ui.label("Length, Mass, Temperature, Force, Pressure, Energy, Power, Torque");
            ui.separator();

            let before = self.kind;
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Quantity");
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(self.kind.name())
                        .show_ui(ui, |ui| {
                            for k in QuantityKind::ALL {
                                ui.selectable_value(&mut self.kind, k, k.name());
                            }
                        });
                    ui.end_row();

                    ui.label("Value");
                    ui.add(egui::DragValue::new(&mut self.value).speed(0.1));
                    ui.end_row();

                    ui.label("From unit");
                    unit_combo(ui, "conv_from", &mut self.from, self.kind);
                    ui.end_row();

                    ui.label("To unit");
                    unit_combo(ui, "conv_to", &mut self.to, self.kind);
                    ui.end_row();
                });
            if before != self.kind {
                self.reset_units();
            }

            ui.add_space(8.0);
            match self.result_line() {
                Ok(line) => ui.label(egui::RichText::new(line).strong()),
                Err(msg) => ui.colored_label(egui::Color32::RED, format!("Error: {msg}")),
            };
        });
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, kind: QuantityKind) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for label in kind.unit_labels() {
                ui.selectable_value(value, label.to_string(), label);
            }
        });
}
