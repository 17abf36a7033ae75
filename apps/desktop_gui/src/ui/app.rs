use std::convert::Infallible;

use client_core::{
    CatalogView, CatalogViewController, ClientSettings, LoadState, ProductCard, Renderer,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::CategorySelection;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const ALL_CATEGORIES_LABEL: &str = "All categories";

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Decode => "Data",
        UiErrorCategory::Configuration => "Setup",
        UiErrorCategory::Unknown => "Error",
    }
}

/// Draws one card per product into the panel it is given.
struct EguiCardList<'a> {
    ui: &'a mut egui::Ui,
}

impl Renderer for EguiCardList<'_> {
    type Error = Infallible;

    fn render(&mut self, view: &CatalogView<'_>) -> Result<(), Infallible> {
        if view.products.is_empty() {
            let message = match view.load_state {
                LoadState::Loading => "Loading catalog...",
                LoadState::Failed(_) => "Catalog unavailable.",
                LoadState::Ready => "No products match the current filters.",
            };
            self.ui.weak(message);
        }

        for product in &view.products {
            let card = ProductCard::from(*product);
            egui::Frame::group(self.ui.style()).show(self.ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading(card.title.as_str());
                ui.label(card.description.as_str());
                ui.strong(card.price_label.as_str());
            });
            self.ui.add_space(6.0);
        }
        Ok(())
    }
}

pub struct CatalogBrowserApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    catalog: CatalogViewController,
    search_input: String,
    endpoint: String,
    status: String,
    status_banner: Option<UiError>,
}

impl CatalogBrowserApp {
    /// Builds the app and queues the startup catalog fetch.
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &ClientSettings,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            catalog: CatalogViewController::new(settings.page_size),
            search_input: String::new(),
            endpoint: settings.endpoint.clone(),
            status: "Loading catalog".to_string(),
            status_banner: None,
        };
        dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadCatalog, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::debug!("backend: {message}");
                }
                UiEvent::CatalogLoaded(products) => {
                    self.catalog.load_catalog(products);
                    self.status = format!(
                        "{} products in {} categories",
                        self.catalog.catalog().len(),
                        self.catalog.categories().len()
                    );
                    self.status_banner = None;
                }
                UiEvent::CatalogFailed(err) => {
                    self.status_banner = Some(UiError::from_load_error(&err));
                    self.status = "Catalog unavailable".to_string();
                    self.catalog.fail_load(err);
                }
                UiEvent::SearchSettled(text) => {
                    self.catalog.set_search_text(text);
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status_banner = Some(err);
                }
            }
        }
    }

    /// The typed search text applies immediately; the debounced copy that
    /// lands later carries the same text.
    fn select_category(&mut self, selection: CategorySelection) {
        if self.catalog.filter().search_text != self.search_input {
            self.catalog.set_search_text(self.search_input.clone());
        }
        self.catalog.set_category(selection);
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = &self.status_banner else {
            return;
        };
        let text = format!("{}: {}", err_label(banner.category()), banner.message());
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), text);
            if ui.small_button("Dismiss").clicked() {
                self.status_banner = None;
            }
        });
    }

    fn show_filter_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Search");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Filter by title")
                    .desired_width(260.0),
            );
            if response.changed() {
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SearchTextChanged(self.search_input.clone()),
                    &mut self.status,
                );
            }

            ui.separator();
            ui.label("Category");
            let mut selection = self.catalog.filter().category.clone();
            egui::ComboBox::from_id_salt("category_filter")
                .selected_text(selection.label().unwrap_or(ALL_CATEGORIES_LABEL).to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut selection,
                        CategorySelection::Any,
                        ALL_CATEGORIES_LABEL,
                    );
                    for category in self.catalog.categories() {
                        ui.selectable_value(
                            &mut selection,
                            CategorySelection::Named(category.clone()),
                            category.as_str(),
                        );
                    }
                });
            if selection != self.catalog.filter().category {
                self.select_category(selection);
            }
        });
        self.show_status_banner(ui);
        ui.add_space(4.0);
    }

    fn show_pager(&mut self, ui: &mut egui::Ui) {
        let window = self.catalog.page_window();
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(window.has_prev, egui::Button::new("Previous"))
                .clicked()
            {
                self.catalog.prev_page();
            }
            ui.label(window.indicator());
            if ui
                .add_enabled(window.has_next, egui::Button::new("Next"))
                .clicked()
            {
                self.catalog.next_page();
            }
            ui.separator();
            ui.weak(format!("{} | {}", self.status, self.endpoint));
        });
        ui.add_space(4.0);
    }
}

impl eframe::App for CatalogBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("filters").show(ctx, |ui| self.show_filter_bar(ui));
        egui::TopBottomPanel::bottom("pager").show(ctx, |ui| self.show_pager(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.catalog
                        .render(&mut EguiCardList { ui })
                        .unwrap_or_else(|never| match never {});
                });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
