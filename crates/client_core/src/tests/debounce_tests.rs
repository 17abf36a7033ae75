use super::*;
use crate::{fixtures::sample_catalog, CatalogView, CatalogViewController, Renderer};

use std::convert::Infallible;

use tokio::time::{sleep, timeout, Instant};

const QUIET: Duration = Duration::from_millis(500);

#[derive(Default)]
struct RecordingRenderer {
    passes: Vec<String>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, view: &CatalogView<'_>) -> Result<(), Infallible> {
        self.passes.push(view.filter.search_text.clone());
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn single_trigger_fires_after_quiet_period() {
    let (mut debouncer, mut rx) = Debouncer::new(QUIET);
    let started = Instant::now();
    debouncer.trigger("lamp".to_string());

    assert_eq!(rx.recv().await.as_deref(), Some("lamp"));
    assert!(started.elapsed() >= QUIET);
}

#[tokio::test(start_paused = true)]
async fn burst_of_edits_delivers_only_final_value() {
    let (mut debouncer, mut rx) = Debouncer::new(QUIET);
    let mut last_trigger = None;
    for text in ["p", "ph", "pho", "phon", "phone"] {
        debouncer.trigger(text.to_string());
        last_trigger = Some(Instant::now());
        sleep(Duration::from_millis(100)).await;
    }

    assert_eq!(rx.recv().await.as_deref(), Some("phone"));
    let last_trigger = last_trigger.expect("triggered");
    assert!(last_trigger.elapsed() >= QUIET);

    sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn edits_separated_by_quiet_period_each_fire() {
    let (mut debouncer, mut rx) = Debouncer::new(QUIET);
    debouncer.trigger("a".to_string());
    sleep(Duration::from_millis(600)).await;
    debouncer.trigger("b".to_string());

    assert_eq!(rx.recv().await.as_deref(), Some("a"));
    assert_eq!(rx.recv().await.as_deref(), Some("b"));
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_pending_value() {
    let (mut debouncer, mut rx) = Debouncer::new(QUIET);
    debouncer.trigger("gone".to_string());
    assert!(debouncer.is_pending());
    debouncer.cancel();
    assert!(!debouncer.is_pending());

    sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn dropping_debouncer_closes_channel_without_delivery() {
    let (mut debouncer, mut rx) = Debouncer::new(QUIET);
    debouncer.trigger("gone".to_string());
    drop(debouncer);

    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn rapid_search_edits_produce_one_filter_and_render_pass() {
    let mut controller = CatalogViewController::default();
    controller.load_catalog(sample_catalog());
    let mut renderer = RecordingRenderer::default();

    let (mut debouncer, mut rx) = Debouncer::new(QUIET);
    for text in ["p", "ph", "pho", "phon", "phone"] {
        debouncer.trigger(text.to_string());
        sleep(Duration::from_millis(80)).await;
    }

    while let Ok(Some(text)) = timeout(Duration::from_secs(2), rx.recv()).await {
        controller.set_search_text(text);
        controller.render(&mut renderer).expect("infallible");
    }

    assert_eq!(renderer.passes, vec!["phone".to_string()]);
    assert_eq!(controller.view().total_matches, 2);
}
