//! Server-sent events for store changes.
//!
//! Every connected client receives the current cart and wishlist on connect
//! and again after each state change. Intermediate states may be skipped when
//! changes arrive faster than a client reads; the latest state always is sent.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::{
        Sse,
        sse::{Event, KeepAlive},
    },
};
use futures::Stream;

use crate::routes::ShopView;
use crate::state::AppState;
use crate::store::ShopState;

/// SSE event name for store snapshots.
pub const SHOP_EVENT: &str = "shop";

/// Stream store snapshots.
///
/// GET /api/events
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut changes = state.store().subscribe();
    tracing::debug!("Store event subscriber connected");

    let events = async_stream::stream! {
        let current = changes.borrow_and_update().clone();
        yield Ok::<_, Infallible>(shop_event(&current));

        while changes.changed().await.is_ok() {
            let current = changes.borrow_and_update().clone();
            yield Ok(shop_event(&current));
        }
    };

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn shop_event(state: &ShopState) -> Event {
    let json = serde_json::to_string(&ShopView::from_state(state)).unwrap_or_else(|_| {
        r#"{"error":"Failed to serialize store state"}"#.to_string()
    });
    Event::default().event(SHOP_EVENT).data(json)
}
