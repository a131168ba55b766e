//! Network actor - runs user fetches in Tokio async runtime

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::view_state::view_state_stream;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_users};
use crate::network::safe_call::RetryPolicy;

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config.timeout()),
            base_url: config.base_url.clone(),
            retry: config.retry.clone(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUsers { id, quantity }) => {
                            self.spawn_fetch(id, quantity);
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // Drop in-flight fetches with the screen
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }

    /// Launch one fetch task. Overlapping fetches are not deduplicated.
    fn spawn_fetch(&mut self, id: u64, quantity: usize) {
        let response_tx = self.response_tx.clone();
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let retry = self.retry.clone();

        self.active_requests.spawn(async move {
            tracing::info!(id, quantity, url = %base_url, "Fetching users");
            let states = view_state_stream(move || async move {
                fetch_users(client, base_url, quantity, retry)
            });
            futures_util::pin_mut!(states);

            while let Some(state) = states.next().await {
                let response = NetworkResponse::Users { id, state };
                let terminal = response.is_terminal();
                if response_tx.send(response).is_err() {
                    tracing::warn!(id, "App layer gone, dropping fetch");
                    return;
                }
                if terminal {
                    break;
                }
            }
            tracing::info!(id, "Fetch completed");
        });
    }
}
