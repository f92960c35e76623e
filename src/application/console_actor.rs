// Console actor - a single task owns the console, callers talk to it over a channel
use crate::application::console::{Console, ConsoleSnapshot};
use crate::application::error::ConsoleError;
use crate::domain::banner::{Banner, BannerDraft, BannerId};
use crate::domain::metrics::DashboardMetrics;
use crate::domain::view::ViewId;
use tokio::sync::{mpsc, oneshot};

const COMMAND_BUFFER: usize = 64;

type Reply<T> = oneshot::Sender<T>;

enum ConsoleCommand {
    Snapshot(Reply<ConsoleSnapshot>),
    SelectView(ViewId, Reply<ConsoleSnapshot>),
    Remount(Reply<ConsoleSnapshot>),
    ListBanners(Reply<Vec<Banner>>),
    DeleteBanner(BannerId, Reply<()>),
    CreateBanner(BannerDraft, Reply<Result<Banner, ConsoleError>>),
    UpdateBanner(BannerId, BannerDraft, Reply<Result<Banner, ConsoleError>>),
    Metrics(Reply<DashboardMetrics>),
}

#[derive(Clone)]
pub struct ConsoleHandle {
    tx: mpsc::Sender<ConsoleCommand>,
}

impl ConsoleHandle {
    /// Move the console into its own task. The task ends when every handle is dropped.
    pub fn spawn(console: Console) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run(console, rx));
        Self { tx }
    }

    pub async fn snapshot(&self) -> Result<ConsoleSnapshot, ConsoleError> {
        self.request(ConsoleCommand::Snapshot).await
    }

    pub async fn select_view(&self, view: ViewId) -> Result<ConsoleSnapshot, ConsoleError> {
        self.request(|reply| ConsoleCommand::SelectView(view, reply)).await
    }

    pub async fn remount(&self) -> Result<ConsoleSnapshot, ConsoleError> {
        self.request(ConsoleCommand::Remount).await
    }

    pub async fn list_banners(&self) -> Result<Vec<Banner>, ConsoleError> {
        self.request(ConsoleCommand::ListBanners).await
    }

    pub async fn delete_banner(&self, id: BannerId) -> Result<(), ConsoleError> {
        self.request(|reply| ConsoleCommand::DeleteBanner(id, reply)).await
    }

    pub async fn create_banner(&self, draft: BannerDraft) -> Result<Banner, ConsoleError> {
        self.request(|reply| ConsoleCommand::CreateBanner(draft, reply))
            .await?
    }

    pub async fn update_banner(
        &self,
        id: BannerId,
        draft: BannerDraft,
    ) -> Result<Banner, ConsoleError> {
        self.request(|reply| ConsoleCommand::UpdateBanner(id, draft, reply))
            .await?
    }

    pub async fn metrics(&self) -> Result<DashboardMetrics, ConsoleError> {
        self.request(ConsoleCommand::Metrics).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(Reply<T>) -> ConsoleCommand,
    ) -> Result<T, ConsoleError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| ConsoleError::ConsoleStopped)?;
        response.await.map_err(|_| ConsoleError::ConsoleStopped)
    }
}

async fn run(mut console: Console, mut rx: mpsc::Receiver<ConsoleCommand>) {
    tracing::debug!("Console actor started");

    while let Some(command) = rx.recv().await {
        // A dropped reply only means the caller went away; keep serving.
        match command {
            ConsoleCommand::Snapshot(reply) => {
                let _ = reply.send(console.snapshot());
            }
            ConsoleCommand::SelectView(view, reply) => {
                console.select_view(view);
                let _ = reply.send(console.snapshot());
            }
            ConsoleCommand::Remount(reply) => {
                console.remount();
                let _ = reply.send(console.snapshot());
            }
            ConsoleCommand::ListBanners(reply) => {
                let _ = reply.send(console.list_banners().to_vec());
            }
            ConsoleCommand::DeleteBanner(id, reply) => {
                console.delete_banner(id);
                let _ = reply.send(());
            }
            ConsoleCommand::CreateBanner(draft, reply) => {
                let _ = reply.send(console.create_banner(draft).await);
            }
            ConsoleCommand::UpdateBanner(id, draft, reply) => {
                let _ = reply.send(console.update_banner(id, draft).await);
            }
            ConsoleCommand::Metrics(reply) => {
                let _ = reply.send(console.metrics().clone());
            }
        }
    }

    tracing::debug!("Console actor stopped");
}
