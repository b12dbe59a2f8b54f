//! In-memory transport for tests.
//!
//! [`ScriptedTransport`] answers from a URL -> response table and records
//! every call in order, so tests can assert which requests a lookup issued.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{FetchStep, TransportError};
use crate::transport::CatalogTransport;

/// Base URL used by the fixtures below.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Status(u16),
}

/// Transport that serves canned responses.
///
/// Unscripted URLs answer 404. A response scripted for a `(url, step)` pair
/// wins over one scripted for the bare URL.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, Scripted>,
    step_responses: HashMap<(String, FetchStep), Scripted>,
    calls: Mutex<Vec<(String, FetchStep)>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    #[must_use]
    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Scripted::Json(body));
        self
    }

    /// Answer `url` with a bare non-success `status`.
    #[must_use]
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Scripted::Status(status));
        self
    }

    /// Answer `url` with `status` only when it is fetched as `step`.
    #[must_use]
    pub fn with_step_status(mut self, url: &str, step: FetchStep, status: u16) -> Self {
        self.step_responses
            .insert((url.to_string(), step), Scripted::Status(status));
        self
    }

    /// Calls issued so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex was poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, FetchStep)> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Steps of the calls issued so far, in order.
    #[must_use]
    pub fn steps(&self) -> Vec<FetchStep> {
        self.calls().into_iter().map(|(_, step)| step).collect()
    }
}

#[async_trait]
impl CatalogTransport for ScriptedTransport {
    async fn get_json(&self, url: &str, step: FetchStep) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push((url.to_string(), step));

        let scripted = self
            .step_responses
            .get(&(url.to_string(), step))
            .or_else(|| self.responses.get(url));
        match scripted {
            Some(Scripted::Json(body)) => Ok(body.clone()),
            Some(Scripted::Status(status)) => Err(TransportError::Api {
                step,
                status: *status,
                message: String::new(),
            }),
            None => Err(TransportError::Api {
                step,
                status: 404,
                message: format!("no scripted response for {url}"),
            }),
        }
    }
}

// ── Fixtures ───────────────────────────────────────────────────────

/// URL of the pikachu record.
#[must_use]
pub fn pikachu_url() -> String {
    format!("{BASE_URL}/pokemon/25")
}

/// URL of pikachu's species resource.
#[must_use]
pub fn pikachu_species_url() -> String {
    format!("{BASE_URL}/pokemon-species/25/")
}

/// URL of the pichu -> pikachu -> raichu chain.
#[must_use]
pub fn pikachu_chain_url() -> String {
    format!("{BASE_URL}/evolution-chain/10/")
}

fn species_ref(name: &str, id: u32) -> Value {
    json!({ "name": name, "url": format!("{BASE_URL}/pokemon-species/{id}/") })
}

/// Record body for pikachu (trimmed to the fields the client reads plus a
/// few it ignores).
#[must_use]
pub fn pikachu_record() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "back_default": null
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": format!("{BASE_URL}/type/13/") } }
        ],
        "species": { "name": "pikachu", "url": pikachu_species_url() }
    })
}

#[must_use]
pub fn pikachu_species() -> Value {
    json!({
        "name": "pikachu",
        "evolution_chain": { "url": pikachu_chain_url() }
    })
}

#[must_use]
pub fn pikachu_chain() -> Value {
    json!({
        "id": 10,
        "chain": {
            "species": species_ref("pichu", 172),
            "evolves_to": [{
                "species": species_ref("pikachu", 25),
                "evolves_to": [{
                    "species": species_ref("raichu", 26),
                    "evolves_to": []
                }]
            }]
        }
    })
}

/// Transport that resolves pikachu end to end.
#[must_use]
pub fn pikachu_transport() -> ScriptedTransport {
    ScriptedTransport::new()
        .with_json(&pikachu_url(), pikachu_record())
        .with_json(&pikachu_species_url(), pikachu_species())
        .with_json(&pikachu_chain_url(), pikachu_chain())
}

/// A listing body with `names` starting at id `first_id`.
#[must_use]
pub fn listing(first_id: u32, names: &[&str], count: Option<u64>) -> Value {
    let results: Vec<Value> = names
        .iter()
        .zip(first_id..)
        .map(|(name, id)| json!({ "name": name, "url": format!("{BASE_URL}/pokemon/{id}/") }))
        .collect();
    match count {
        Some(count) => json!({ "count": count, "next": null, "previous": null, "results": results }),
        None => json!({ "results": results }),
    }
}
