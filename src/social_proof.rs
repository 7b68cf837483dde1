use gloo_net::http::Request;
use log::{debug, error};
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;

pub const SOCIAL_PROOF_PATH: &str = "/api/public/social-proof";

/// Shown whenever the live numbers can't be had.
pub const FALLBACK: SocialProof = SocialProof {
    athletes_count: 150,
    countries_count: 12,
    waitlist_count: 200,
};

/// Aggregate counters shown in the social proof strip. The three fields are
/// always replaced together.
///
/// Counts decode as `u32`, so negative or fractional values in a payload are
/// rejected as malformed rather than displayed.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SocialProof {
    pub athletes_count: u32,
    pub countries_count: u32,
    pub waitlist_count: u32,
}

impl SocialProof {
    /// Values the counters animate towards: a zero field shows its fallback.
    pub fn display_targets(&self) -> SocialProof {
        let or_fallback = |value: u32, fallback: u32| if value == 0 { fallback } else { value };
        SocialProof {
            athletes_count: or_fallback(self.athletes_count, FALLBACK.athletes_count),
            countries_count: or_fallback(self.countries_count, FALLBACK.countries_count),
            waitlist_count: or_fallback(self.waitlist_count, FALLBACK.waitlist_count),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SocialProofError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed social proof payload: {0}")]
    Malformed(String),
}

pub fn check_status(status: u16) -> Result<(), SocialProofError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SocialProofError::Status(status))
    }
}

pub fn decode_body(body: &str) -> Result<SocialProof, SocialProofError> {
    serde_json::from_str(body).map_err(|e| SocialProofError::Malformed(e.to_string()))
}

pub async fn fetch_social_proof(config: &AppConfig) -> Result<SocialProof, SocialProofError> {
    let response = Request::get(&config.endpoint(SOCIAL_PROOF_PATH))
        .send()
        .await
        .map_err(|e| SocialProofError::Transport(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| SocialProofError::Transport(e.to_string()))?;
    decode_body(&body)
}

/// Collapses every failure into [`FALLBACK`].
pub fn settle(result: Result<SocialProof, SocialProofError>) -> SocialProof {
    match result {
        Ok(proof) => {
            debug!("Loaded social proof: {:?}", proof);
            proof
        }
        Err(e) => {
            error!("Failed to fetch social proof: {}", e);
            FALLBACK
        }
    }
}

/// One attempt, no retry. Never fails.
pub async fn load_social_proof(config: &AppConfig) -> SocialProof {
    settle(fetch_social_proof(config).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(status: u16, body: &str) -> SocialProof {
        settle(check_status(status).and_then(|_| decode_body(body)))
    }

    #[test]
    fn successful_response_replaces_record_exactly() {
        let proof = respond(
            200,
            r#"{"athletes_count": 300, "countries_count": 25, "waitlist_count": 500}"#,
        );
        assert_eq!(
            proof,
            SocialProof {
                athletes_count: 300,
                countries_count: 25,
                waitlist_count: 500,
            }
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let proof = respond(
            200,
            r#"{"athletes_count": 1, "countries_count": 2, "waitlist_count": 3, "updated": "today"}"#,
        );
        assert_eq!(proof.waitlist_count, 3);
    }

    #[test]
    fn server_error_falls_back() {
        assert_eq!(check_status(500), Err(SocialProofError::Status(500)));
        assert_eq!(respond(500, "{}"), FALLBACK);
    }

    #[test]
    fn network_error_falls_back() {
        let proof = settle(Err(SocialProofError::Transport(
            "NetworkError when attempting to fetch resource".into(),
        )));
        assert_eq!(proof, FALLBACK);
    }

    #[test]
    fn malformed_json_falls_back() {
        assert!(matches!(
            decode_body("<html>oops</html>"),
            Err(SocialProofError::Malformed(_))
        ));
        assert_eq!(respond(200, "<html>oops</html>"), FALLBACK);
    }

    #[test]
    fn missing_field_is_malformed() {
        assert_eq!(respond(200, r#"{"athletes_count": 10, "countries_count": 2}"#), FALLBACK);
    }

    #[test]
    fn negative_or_fractional_counts_are_rejected() {
        assert_eq!(
            respond(200, r#"{"athletes_count": -4, "countries_count": 2, "waitlist_count": 3}"#),
            FALLBACK
        );
        assert_eq!(
            respond(200, r#"{"athletes_count": 4.5, "countries_count": 2, "waitlist_count": 3}"#),
            FALLBACK
        );
    }

    #[test]
    fn fallback_matches_published_constants() {
        assert_eq!(
            (FALLBACK.athletes_count, FALLBACK.countries_count, FALLBACK.waitlist_count),
            (150, 12, 200)
        );
    }

    #[test]
    fn zero_fields_display_their_fallback() {
        let proof = SocialProof {
            athletes_count: 40,
            countries_count: 0,
            waitlist_count: 0,
        };
        assert_eq!(
            proof.display_targets(),
            SocialProof {
                athletes_count: 40,
                countries_count: 12,
                waitlist_count: 200,
            }
        );
    }
}
