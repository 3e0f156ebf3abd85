//! Async tasks bridging the REST client and the message loop.
//!
//! Every task resolves into a [`Message`]; fetches carry the generation
//! token handed out by [`ListState::begin_fetch`](crate::state::ListState)
//! so stale responses can be discarded by the handler.

use cosmic::{action, app::Task};
use std::time::{Duration, Instant};

use crate::api::{ApiClient, AppDraft, ListQuery};
use crate::constants::{FLIP_BACK_SECS, TOAST_TIMEOUT_SECS};
use crate::message::{Message, MutationOutcome};

pub fn list_task(client: ApiClient, token: u64, query: ListQuery) -> Task<Message> {
    Task::perform(
        async move {
            let start = Instant::now();
            let result = client.list(&query).await;
            match &result {
                Ok(page) => log::info!(
                    "fetched page {} of {} ({} records) in {:?}",
                    query.page,
                    page.pagination.total_pages,
                    page.applications.len(),
                    start.elapsed()
                ),
                Err(err) => log::warn!("failed to fetch page {}: {}", query.page, err),
            }
            action::app(Message::PageResults(
                token,
                result.map_err(|err| err.message()),
            ))
        },
        |x| x,
    )
}

pub fn save_task(client: ApiClient, id: Option<String>, draft: AppDraft) -> Task<Message> {
    Task::perform(
        async move {
            let result = match &id {
                Some(id) => client.update(id, &draft).await,
                None => client.create(&draft).await,
            };
            match result {
                Ok(record) => {
                    log::info!("saved application {:?}", record.id);
                    action::app(Message::Mutated(MutationOutcome::Saved))
                }
                Err(err) => {
                    log::warn!("failed to save application: {}", err);
                    action::app(Message::ActionError(err.message()))
                }
            }
        },
        |x| x,
    )
}

pub fn set_active_task(client: ApiClient, id: String, active: bool) -> Task<Message> {
    Task::perform(
        async move {
            match client.set_active(&id, active).await {
                Ok(_) => {
                    log::info!("set {:?} active to {}", id, active);
                    action::app(Message::Mutated(MutationOutcome::ActiveSet))
                }
                Err(err) => {
                    log::warn!("failed to set {:?} active to {}: {}", id, active, err);
                    action::app(Message::ActionError(err.message()))
                }
            }
        },
        |x| x,
    )
}

pub fn delete_task(client: ApiClient, id: String) -> Task<Message> {
    Task::perform(
        async move {
            match client.delete(&id).await {
                Ok(()) => {
                    log::info!("deleted application {:?}", id);
                    action::app(Message::Mutated(MutationOutcome::Deleted))
                }
                Err(err) => {
                    log::warn!("failed to delete {:?}: {}", id, err);
                    action::app(Message::ActionError(err.message()))
                }
            }
        },
        |x| x,
    )
}

/// Flip-back timer for one tile; the token decides whether it still owns the
/// flip when it fires
pub fn flip_back_timer(id: String, token: u64) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_secs(FLIP_BACK_SECS)).await;
            action::app(Message::FlipExpired(id, token))
        },
        |x| x,
    )
}

pub fn toast_timer(token: u64) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_secs(TOAST_TIMEOUT_SECS)).await;
            action::app(Message::ToastExpired(token))
        },
        |x| x,
    )
}
