//! Cooperative-session boundary.
//!
//! The relay transport itself (rooms, sockets, encoding) lives outside this
//! crate; what is fixed here is the event vocabulary peers exchange and how
//! the engine-relevant events map onto a [`Game`]. Callers own the transport
//! loop and must serialize [`dispatch`] with their local guess input; the
//! `&mut Game` makes interleaving impossible to express anyway. The engine
//! never re-emits an event it processed; re-broadcast decisions belong to the
//! caller and hinge on where the event came from, which is exactly what
//! [`CoopEvent::from`] carries.

use crate::api::{Article, Game, GuessOutcome};

/// An event received from (or addressed to) a cooperative room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoopEvent {
    /// Sender peer id, client-generated.
    pub from: String,
    pub payload: CoopPayload,
}

/// The event vocabulary of a cooperative session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoopPayload {
    Hello,
    Goodbye,
    /// A raw guess typed by a peer.
    Guess { text: String },
    /// A peer surrendered the round for the room.
    Reveal,
    /// A peer loaded a fresh document for the room.
    LoadArticle { title: String, url: String, content: String },
    NewGame,
    /// A late joiner asking for the room's current document.
    SyncRequest,
}

/// What the caller should do after dispatching an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventEffect {
    /// A peer guess was resolved against the local game.
    Guess(GuessOutcome),
    /// The board was fully revealed.
    Revealed,
    /// The room switched documents: build a fresh `Game` from this article
    /// (index and conjugation configuration are the caller's to choose).
    LoadRequested(Article),
    /// A peer wants a new round: acquire a document and broadcast it.
    NewGameRequested,
    /// A peer wants the current document: answer with a `load-article` event.
    SyncRequested,
    /// Presence-only event, nothing to apply.
    Ignored,
}

/// Apply one room event to the local game. Engine behavior for a relayed
/// guess is identical to a local one.
pub fn dispatch(game: &mut Game, event: &CoopEvent) -> EventEffect {
    match &event.payload {
        CoopPayload::Guess { text } => EventEffect::Guess(game.apply_guess(text)),
        CoopPayload::Reveal => {
            game.full_reveal();
            EventEffect::Revealed
        }
        CoopPayload::LoadArticle { title, url, content } => EventEffect::LoadRequested(Article {
            title: title.clone(),
            url: Some(url.clone()),
            content: content.clone(),
        }),
        CoopPayload::NewGame => EventEffect::NewGameRequested,
        CoopPayload::SyncRequest => EventEffect::SyncRequested,
        CoopPayload::Hello | CoopPayload::Goodbye => EventEffect::Ignored,
    }
}
