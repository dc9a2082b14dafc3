//! Entity/error notification fan-out for the client.
//!
//! The client owns a typed subscription registry instead of an emitter
//! mixin: [`SirenClient::events`](crate::core::client::SirenClient::events)
//! hands out an [`EventStream`], each completed navigation is delivered to
//! every live stream exactly once, and dropping a stream unsubscribes it.

use crate::core::entity::Entity;
use crate::core::error::SirenError;
use futures::Stream;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use std::task::{Context, Poll};

/// A notification delivered after a navigation completes.
#[derive(Clone, Debug)]
pub enum ClientEvent {
    /// An entity was retrieved; `href` is the resolved final URL it was
    /// served from.
    Entity { entity: Entity, href: String },
    /// The navigation failed; `href` is the requested URL when it was
    /// known at failure time.
    Error {
        error: SirenError,
        href: Option<String>,
    },
}

/// Stream of [`ClientEvent`]s for one subscriber.
///
/// Dropping the stream unsubscribes; the registry prunes it at the next
/// emit.
pub struct EventStream {
    receiver: async_channel::Receiver<ClientEvent>,
}

impl EventStream {
    pub(crate) fn new(receiver: async_channel::Receiver<ClientEvent>) -> Self {
        EventStream { receiver }
    }

    /// Wait for the next notification; `None` once the client is gone.
    pub async fn next(&mut self) -> Option<ClientEvent> {
        self.receiver.recv().await.ok()
    }

    /// Take an already-delivered notification without waiting.
    pub fn try_next(&self) -> Option<ClientEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for EventStream {
    type Item = ClientEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

/// Subscriber registry shared by all clones of a client.
#[derive(Default)]
pub(crate) struct EventBus {
    subscribers: Mutex<Vec<async_channel::Sender<ClientEvent>>>,
}

impl EventBus {
    pub fn subscribe(&self) -> EventStream {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        EventStream::new(rx)
    }

    /// Deliver `event` to every live subscriber, pruning closed ones.
    pub fn emit(&self, event: ClientEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());
    }
}
