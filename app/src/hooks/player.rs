use rand::distributions::Alphanumeric;
use rand::Rng;

const PLAYER_ID_LEN: usize = 12;

/// Player id of this browser, shared by every game it joins.
///
/// Kept in local storage so a reload does not turn the player into a
/// stranger in a game they already joined.
#[cfg(feature = "web")]
pub fn load_or_create_player_id() -> String {
    use gloo_storage::{LocalStorage, Storage};

    if let Ok(id) = LocalStorage::get::<String>(crate::PLAYER_ID_KEY) {
        if !id.is_empty() {
            return id;
        }
    }

    let id = new_player_id(&mut rand::thread_rng());
    if let Err(e) = LocalStorage::set(crate::PLAYER_ID_KEY, &id) {
        tracing::warn!("Failed to persist player id: {}", e);
    }
    id
}

#[cfg(not(feature = "web"))]
pub fn load_or_create_player_id() -> String {
    new_player_id(&mut rand::thread_rng())
}

pub fn new_player_id<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(PLAYER_ID_LEN)
        .map(char::from)
        .collect()
}
