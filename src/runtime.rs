//! Wiring between the poller task and the UI

use crate::api::ApiClient;
use crate::consts::cli_consts;
use crate::events::Event;
use crate::poller::{Command, Poller};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Spawn the poller task and hand the UI its channel endpoints.
pub fn start_poller(
    api: ApiClient,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, mpsc::Sender<Command>, JoinHandle<()>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(cli_consts::EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) =
        mpsc::channel::<Command>(cli_consts::COMMAND_QUEUE_SIZE);

    let poller = Poller::new(Box::new(api), event_sender);
    let join_handle = tokio::spawn(async move {
        poller.run(command_receiver, shutdown).await;
    });

    (event_receiver, command_sender, join_handle)
}
