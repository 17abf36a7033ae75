//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadCatalog => "load_catalog",
        BackendCommand::SearchTextChanged(_) => "search_text_changed",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure)"
                    .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn queues_command_without_touching_status() {
        let (tx, rx) = bounded(1);
        let mut status = "Ready".to_string();
        dispatch_backend_command(&tx, BackendCommand::LoadCatalog, &mut status);
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::LoadCatalog)));
        assert_eq!(status, "Ready");
    }

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::LoadCatalog, &mut status);
        dispatch_backend_command(
            &tx,
            BackendCommand::SearchTextChanged("lamp".into()),
            &mut status,
        );
        assert!(status.contains("queue is full"));

        drop(rx);
        dispatch_backend_command(&tx, BackendCommand::LoadCatalog, &mut status);
        assert!(status.contains("disconnected"));
    }
}
