use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};

use super::api::GameClient;
use crate::controller::{self, Effect, Model, Msg};
use crate::route::Route;
use crate::{API_URL, REFRESH_INTERVAL_MS};

/// Handle to the running controller, shared with every page through context.
#[derive(Clone, Copy)]
pub struct Controller {
    model: Signal<Model>,
    inbox: Coroutine<Msg>,
}

impl Controller {
    pub fn send(&self, msg: Msg) {
        self.inbox.send(msg);
    }

    pub fn model(&self) -> Signal<Model> {
        self.model
    }
}

pub fn use_controller() -> Controller {
    use_context::<Controller>()
}

/// Starts the controller for this session. Must run inside the router so
/// route changes can be observed and pushed.
pub fn use_controller_provider(player_id: String) -> Controller {
    let model = use_signal(|| Model::new(player_id));
    let navigator = use_navigator();
    let client = use_hook(|| GameClient::new(API_URL));

    // One message at a time: `update` runs to completion before the next
    // message is taken, and HTTP completions queue up like any other event.
    let inbox = use_coroutine(move |mut rx: UnboundedReceiver<Msg>| {
        let client = client.clone();
        let mut model = model;
        async move {
            let mut in_flight: FuturesUnordered<LocalBoxFuture<'static, Msg>> =
                FuturesUnordered::new();

            loop {
                let msg = futures::select! {
                    msg = rx.next() => match msg {
                        Some(msg) => msg,
                        None => break,
                    },
                    msg = in_flight.select_next_some() => msg,
                };

                let effects = controller::update(&mut model.write(), msg);

                for effect in effects {
                    tracing::debug!(?effect, "running effect");
                    match effect {
                        Effect::FetchGame { id, request } => {
                            let client = client.clone();
                            in_flight.push(
                                async move {
                                    let result = client.fetch_or_create_game(&id).await;
                                    Msg::GameReceived {
                                        id,
                                        request,
                                        result,
                                    }
                                }
                                .boxed_local(),
                            );
                        }
                        Effect::SubmitGuess { request, guess } => {
                            let client = client.clone();
                            in_flight.push(
                                async move {
                                    let result = client.submit_guess(&guess).await;
                                    Msg::GameReceived {
                                        id: guess.game_id,
                                        request,
                                        result,
                                    }
                                }
                                .boxed_local(),
                            );
                        }
                        Effect::PushUrl(route) => {
                            navigator.push(route);
                        }
                        Effect::Load(href) => load(&href),
                    }
                }
            }
        }
    });

    // Every route change, including the first render, is an event.
    let route = use_route::<Route>();
    use_effect(use_reactive((&route,), move |(route,)| {
        inbox.send(Msg::UrlChanged(route));
    }));

    // Other devices guess too; poll so their moves show up here.
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            inbox.send(Msg::RefreshTick);
        }
    });

    use_context_provider(|| Controller { model, inbox })
}

#[cfg(feature = "web")]
fn load(href: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No window to load {}", href);
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        tracing::error!("Failed to load {}: {:?}", href, e);
    }
}

#[cfg(not(feature = "web"))]
fn load(href: &str) {
    tracing::warn!("External links are only followed in the browser: {}", href);
}
