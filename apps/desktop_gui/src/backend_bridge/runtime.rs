//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{CatalogSource, ClientSettings, Debouncer, HttpCatalogSource};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let source: Arc<dyn CatalogSource> = match HttpCatalogSource::new(&settings) {
                Ok(source) => Arc::new(source),
                Err(err) => {
                    tracing::error!("backend: cannot build catalog source: {err}");
                    let _ = ui_tx.try_send(UiEvent::CatalogFailed(err));
                    return;
                }
            };

            let (mut debouncer, mut settled_rx) = Debouncer::new(settings.search_debounce);
            let settled_tx = ui_tx.clone();
            tokio::spawn(async move {
                while let Some(text) = settled_rx.recv().await {
                    tracing::debug!(search = %text, "backend: search settled");
                    let _ = settled_tx.try_send(UiEvent::SearchSettled(text));
                }
            });

            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            let mut load_task: Option<tokio::task::JoinHandle<()>> = None;
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCatalog => {
                        if load_task.as_ref().is_some_and(|task| !task.is_finished()) {
                            tracing::debug!("backend: catalog load already in flight");
                            continue;
                        }
                        tracing::info!(endpoint = %settings.endpoint, "backend: load_catalog");
                        let source = Arc::clone(&source);
                        let ui_tx = ui_tx.clone();
                        load_task = Some(tokio::spawn(async move {
                            let event = match source.fetch_products().await {
                                Ok(products) => UiEvent::CatalogLoaded(products),
                                Err(err) => {
                                    tracing::error!("backend: load_catalog failed: {err}");
                                    UiEvent::CatalogFailed(err)
                                }
                            };
                            let _ = ui_tx.try_send(event);
                        }));
                    }
                    BackendCommand::SearchTextChanged(text) => debouncer.trigger(text),
                }
            }
            tracing::info!("backend: command queue closed; shutting down");
        });
    });
}
