//! Browser side of the document fetch: a `fetch()` transport and the hook
//! each data page mounts with.
use figb_stats::{FetchState, Resource};
use serde::de::DeserializeOwned;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use figb_stats::{LoadError, RawResponse, load_resource};

/// Transport backed by `window.fetch`, resolving paths against `PUBLIC_URL`.
///
/// # Errors
/// Network failures map to [`LoadError::Request`]; a successful response
/// whose body is not text maps to [`LoadError::Utf8`].
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
pub async fn browser_fetch(path: String) -> Result<RawResponse, LoadError> {
    let url = crate::paths::asset_path(&path);
    let fetched = dom::fetch_text(&url)
        .await
        .map_err(|err| LoadError::Request(dom::js_error_message(&err)))?;

    Ok(RawResponse {
        status: fetched.status,
        status_text: fetched.status_text,
        body: fetched.body.ok_or(LoadError::Utf8)?,
    })
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch<T>(resource: Resource, state: UseStateHandle<FetchState<T>>)
where
    T: DeserializeOwned + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = load_resource::<T, _, _>(resource, browser_fetch).await;
        if let Err(err) = &outcome {
            dom::console_error(&format!("Errore caricamento {resource}: {err}"));
        }
        let mut next = FetchState::default();
        if next.settle(outcome) {
            state.set(next);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch<T>(resource: Resource, state: UseStateHandle<FetchState<T>>)
where
    T: DeserializeOwned + 'static,
{
    log::debug!("no browser transport for {resource}; staying {:?}", state.is_settled());
}

/// Fetch `resource` once when the calling component mounts.
///
/// The returned state starts as `Loading` and settles once; unmounting drops
/// the state and a later visit fetches again.
#[hook]
pub fn use_resource<T>(resource: Resource) -> FetchState<T>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(FetchState::<T>::default);
    {
        let state = state.clone();
        use_effect_with(resource, move |resource| {
            spawn_fetch(*resource, state);
        });
    }
    (*state).clone()
}
