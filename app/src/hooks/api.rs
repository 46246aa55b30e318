use codenames_api::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("game service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed game snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the game service.
#[derive(Clone, Debug)]
pub struct GameClient {
    http: reqwest::Client,
    base_url: String,
}

impl GameClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Returns the game with this id, asking the service to create it if it
    /// does not exist. Safe to repeat.
    pub async fn fetch_or_create_game(&self, game_id: &str) -> Result<Game, ClientError> {
        let request = NewGameRequest {
            game_id: game_id.to_string(),
        };
        self.post("new-game", &request).await
    }

    /// Submits a guess and returns the snapshot the service settled on.
    pub async fn submit_guess(&self, guess: &GuessRequest) -> Result<Game, ClientError> {
        self.post("guess", guess).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Game, ClientError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        decode_game(status, &text)
    }
}

/// Interprets a game service response.
pub fn decode_game(status: u16, body: &str) -> Result<Game, ClientError> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Status {
            status,
            body: body.trim().to_string(),
        });
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = GameClient::new("http://localhost:8080/");
        assert_eq!(client.endpoint("guess"), "http://localhost:8080/guess");

        let client = GameClient::new("https://codenames.example/api");
        assert_eq!(
            client.endpoint("new-game"),
            "https://codenames.example/api/new-game"
        );
    }

    #[test]
    fn decodes_successful_snapshot() {
        let body = r#"{
            "id": "g1",
            "cells": [{ "index": 0, "word": "moon", "a": [false, "t"], "b": [false, "g"] }],
            "players": { "p1": "b" },
            "one_layout": ["t"],
            "two_layout": ["g"]
        }"#;
        let game = decode_game(200, body).unwrap();
        assert_eq!(game.id, "g1");
        assert_eq!(game.cells[0].word, "moon");
        assert_eq!(game.resolve_default_team("p1"), Team::B);
    }

    #[test]
    fn non_success_status_keeps_the_body() {
        let err = decode_game(404, "no such game\n").unwrap_err();
        assert!(matches!(
            &err,
            ClientError::Status { status: 404, body } if body == "no such game"
        ));
        assert_eq!(err.to_string(), "game service answered 404: no such game");
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = decode_game(200, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Nothing listens on port 1.
        let client = GameClient::new("http://127.0.0.1:1");
        let err = client.fetch_or_create_game("g1").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
