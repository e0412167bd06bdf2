//! Marvel API request authentication.
//!
//! Every request carries `apikey`, `ts`, and `hash` query parameters, where
//! `hash` = md5(ts + private_key + public_key) per the Marvel developer
//! portal convention.

use chrono::Utc;
use md5::{Digest, Md5};

/// Credential pair for signing upstream requests.
#[derive(Debug, Clone)]
pub struct ApiAuth {
    public_key: String,
    private_key: String,
}

impl ApiAuth {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Produces the three authentication query parameters for one request.
    ///
    /// A fresh timestamp is generated per call; the hash is bound to it.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let ts = Utc::now().timestamp_millis().to_string();
        let hash = auth_hash(&ts, &self.private_key, &self.public_key);

        vec![
            ("apikey", self.public_key.clone()),
            ("ts", ts),
            ("hash", hash),
        ]
    }
}

/// Computes the Marvel request hash: hex(md5(ts + private_key + public_key)).
pub fn auth_hash(ts: &str, private_key: &str, public_key: &str) -> String {
    let digest = Md5::digest(format!("{ts}{private_key}{public_key}").as_bytes());
    hex::encode(digest)
}
