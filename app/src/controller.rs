//! Page state machine of the client.
//!
//! `update` is a pure transition function: it takes the current model and
//! one event, mutates the model in place and returns the side effects the
//! host must carry out. Nothing here touches the network, the router or the
//! DOM; `hooks::use_controller` owns those and feeds results back in as new
//! messages.

use std::collections::BTreeSet;

use codenames_api::prelude::*;

use crate::hooks::ClientError;
use crate::route::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    NotFound,
    Home {
        /// Game id typed into the form so far.
        draft: String,
    },
    GameLoading {
        id: String,
    },
    GameInProgress {
        id: String,
        game: Game,
        team: Team,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub player_id: String,
    pub page: Page,
    pub requests: Requests,
}

impl Model {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            page: Page::Home {
                draft: String::new(),
            },
            requests: Requests::default(),
        }
    }
}

/// Game service requests in the order they were issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Book-keeping for game service requests that are still unanswered.
///
/// Replies can arrive in any order. A snapshot is only applied if its
/// request was issued after the one behind the snapshot on screen, so an
/// old refresh can never undo a guess that was already answered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Requests {
    issued: u64,
    applied: RequestId,
    pending: BTreeSet<RequestId>,
}

impl Requests {
    fn issue(&mut self) -> RequestId {
        self.issued += 1;
        let request = RequestId(self.issued);
        self.pending.insert(request);
        request
    }

    /// Marks `request` answered. Returns false if a newer snapshot is
    /// already applied.
    fn answer(&mut self, request: RequestId) -> bool {
        self.pending.remove(&request);
        request > self.applied
    }

    fn mark_applied(&mut self, request: RequestId) {
        self.applied = request;
    }

    fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Target of a clicked link.
#[derive(Clone, Debug, PartialEq)]
pub enum UrlRequest {
    Internal(Route),
    External(String),
}

impl UrlRequest {
    pub fn href(&self) -> String {
        match self {
            UrlRequest::Internal(route) => route.to_string(),
            UrlRequest::External(href) => href.clone(),
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    UrlChanged(Route),
    LinkClicked(UrlRequest),
    DraftChanged(String),
    SubmitNewGame,
    /// Response to a fetch or a guess for game `id`.
    GameReceived {
        id: String,
        request: RequestId,
        result: Result<Game, ClientError>,
    },
    PickTeam(Team),
    /// Board index of the clicked tile.
    PickWord(usize),
    RefreshTick,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the game, creating it on the service if it does not exist yet.
    FetchGame { id: String, request: RequestId },
    SubmitGuess {
        request: RequestId,
        guess: GuessRequest,
    },
    /// Push a history entry. The router reports it back as `UrlChanged`.
    PushUrl(Route),
    /// Leave the app for an external page.
    Load(String),
}

/// Game id to open for a typed draft. Ids are a single URL segment, so a
/// draft with a `/` in it has no game room.
pub fn game_id_from_draft(draft: &str) -> Option<&str> {
    let id = draft.trim();
    (!id.is_empty() && !id.contains('/')).then_some(id)
}

pub fn update(model: &mut Model, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::UrlChanged(route) => url_changed(model, route),
        Msg::LinkClicked(UrlRequest::Internal(route)) => vec![Effect::PushUrl(route)],
        Msg::LinkClicked(UrlRequest::External(href)) => vec![Effect::Load(href)],
        Msg::DraftChanged(text) => {
            if let Page::Home { draft } = &mut model.page {
                *draft = text;
            }
            vec![]
        }
        Msg::SubmitNewGame => match &model.page {
            Page::Home { draft } => game_id_from_draft(draft)
                .map(|id| Effect::PushUrl(Route::GameRoom { id: id.to_string() }))
                .into_iter()
                .collect(),
            _ => vec![],
        },
        Msg::GameReceived {
            id,
            request,
            result,
        } => {
            game_received(model, id, request, result);
            vec![]
        }
        Msg::PickTeam(team) => {
            if let Page::GameInProgress { team: current, .. } = &mut model.page {
                *current = team;
            }
            vec![]
        }
        Msg::PickWord(index) => pick_word(model, index).into_iter().collect(),
        Msg::RefreshTick => match &model.page {
            // A slow service gets one request at a time, not one per tick.
            Page::GameInProgress { id, .. } if model.requests.is_idle() => {
                vec![Effect::FetchGame {
                    id: id.clone(),
                    request: model.requests.issue(),
                }]
            }
            _ => vec![],
        },
    }
}

fn url_changed(model: &mut Model, route: Route) -> Vec<Effect> {
    let (page, effects) = match route {
        Route::Home {} => (
            Page::Home {
                draft: String::new(),
            },
            vec![],
        ),
        Route::GameRoom { id } => (
            Page::GameLoading { id: id.clone() },
            vec![Effect::FetchGame {
                id,
                request: model.requests.issue(),
            }],
        ),
        Route::PageNotFound { .. } => (Page::NotFound, vec![]),
    };
    tracing::debug!(?page, "url changed");
    model.page = page;
    effects
}

fn game_received(
    model: &mut Model,
    id: String,
    request: RequestId,
    result: Result<Game, ClientError>,
) {
    let fresh = model.requests.answer(request);
    let game = match result {
        Ok(game) => game,
        Err(e) => {
            // Nothing on screen depends on the failure; the next refresh or
            // click retries.
            tracing::warn!("Game service request for {} failed: {}", id, e);
            return;
        }
    };
    if !fresh {
        tracing::debug!(%id, ?request, "dropping snapshot older than the one shown");
        return;
    }

    match &mut model.page {
        Page::GameInProgress {
            id: current,
            game: snapshot,
            ..
        } if *current == id => {
            *snapshot = game;
            model.requests.mark_applied(request);
        }
        Page::GameLoading { id: loading } if *loading == id => {
            let team = game.resolve_default_team(&model.player_id);
            tracing::debug!(%id, %team, "game loaded");
            model.page = Page::GameInProgress { id, game, team };
            model.requests.mark_applied(request);
        }
        _ => tracing::debug!(%id, "dropping snapshot for a page no longer shown"),
    }
}

fn pick_word(model: &mut Model, index: usize) -> Option<Effect> {
    let Page::GameInProgress { id, game, team } = &model.page else {
        return None;
    };
    let cell = game.cell(index)?;
    if !cell.is_pickable_by(*team) {
        return None;
    }
    let guess = GuessRequest {
        game_id: id.clone(),
        index: cell.index,
        player_id: model.player_id.clone(),
        team: *team,
    };
    Some(Effect::SubmitGuess {
        request: model.requests.issue(),
        guess,
    })
}
