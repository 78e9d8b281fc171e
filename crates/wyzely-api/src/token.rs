// Refresh-token inspection
//
// The client holds no signing key, so tokens are decoded with signature
// validation disabled -- the only question asked here is "has this
// expired", which the cloud will re-check anyway. Every failure path
// resolves to "not valid"; a garbage token file just means re-login.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// When the token expires, if it parses as a JWT and carries an `exp` claim.
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    if token.is_empty() {
        return None;
    }

    let header = match decode_header(token) {
        Ok(header) => header,
        Err(e) => {
            debug!("token header did not parse: {e}");
            return None;
        }
    };

    let mut validation = Validation::new(header.alg);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp"]);

    match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => DateTime::from_timestamp(data.claims.exp, 0),
        Err(e) => {
            debug!("token claims did not parse: {e}");
            None
        }
    }
}

/// Whether the token parses and its `exp` claim is still in the future.
///
/// Empty, malformed, and `exp`-less tokens are all simply not valid.
pub fn is_valid(token: &str) -> bool {
    match expires_at(token) {
        Some(exp) => Utc::now() < exp,
        None => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    use super::*;

    fn token_with_exp(exp: i64) -> String {
        encode(
            &Header::default(),
            &json!({ "exp": exp, "sub": "user-1" }),
            &EncodingKey::from_secret(b"irrelevant"),
        )
        .unwrap()
    }

    #[test]
    fn future_exp_is_valid() {
        let exp = (Utc::now() + Duration::hours(2)).timestamp();
        assert!(is_valid(&token_with_exp(exp)));
    }

    #[test]
    fn past_exp_is_not_valid() {
        let exp = (Utc::now() - Duration::hours(2)).timestamp();
        assert!(!is_valid(&token_with_exp(exp)));
    }

    #[test]
    fn empty_token_is_not_valid() {
        assert!(!is_valid(""));
    }

    #[test]
    fn malformed_token_is_not_valid() {
        assert!(!is_valid("not-a-jwt"));
        assert!(!is_valid("aaaa.bbbb.cccc"));
    }

    #[test]
    fn missing_exp_is_not_valid() {
        let token = encode(
            &Header::default(),
            &json!({ "sub": "user-1" }),
            &EncodingKey::from_secret(b"irrelevant"),
        )
        .unwrap();
        assert!(!is_valid(&token));
    }

    #[test]
    fn expires_at_reports_the_claim() {
        let exp = (Utc::now() + Duration::hours(2)).timestamp();
        let reported = expires_at(&token_with_exp(exp)).unwrap();
        assert_eq!(reported.timestamp(), exp);
    }

    #[test]
    fn expires_at_works_on_expired_tokens() {
        // Expired is still an answer -- `auth status` shows when it died.
        let exp = (Utc::now() - Duration::hours(2)).timestamp();
        assert!(expires_at(&token_with_exp(exp)).is_some());
    }
}
