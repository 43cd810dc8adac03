use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use thiserror::Error;

pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

pub(crate) fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub(crate) fn gen_random_bytes(len: usize) -> Result<Vec<u8>, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random bytes".to_string()))?;
    Ok(bytes)
}

/// Generate `len` random bytes and return them base64url encoded.
pub fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let bytes = gen_random_bytes(len)?;
    Ok(base64url_encode(&bytes))
}

/// Attributes of an outgoing `Set-Cookie` header.
#[derive(Debug, Clone)]
pub(crate) struct CookieSpec<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
    pub(crate) max_age: i64,
    pub(crate) secure: bool,
}

pub(crate) fn header_set_cookie<'h>(
    headers: &'h mut HeaderMap,
    cookie: CookieSpec<'_>,
) -> Result<&'h HeaderMap, UtilError> {
    let secure = if cookie.secure { " Secure;" } else { "" };
    let value = format!(
        "{}={}; SameSite=Lax;{secure} HttpOnly; Path=/; Max-Age={}",
        cookie.name, cookie.value, cookie.max_age
    );
    tracing::trace!(cookie = %cookie.name, max_age = cookie.max_age, "Setting cookie");
    headers.append(
        SET_COOKIE,
        value
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

/// Find the value of the cookie called `name` in the request's `Cookie` headers.
pub(crate) fn cookie_value_from_headers<'h>(
    headers: &'h HeaderMap,
    name: &str,
) -> Result<Option<&'h str>, UtilError> {
    for cookie_header in headers.get_all(http::header::COOKIE) {
        let cookie_str = cookie_header
            .to_str()
            .map_err(|_| UtilError::Cookie("Invalid cookie header".to_string()))?;

        let found = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
            let mut parts = s.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(k), Some(v)) if k == name => Some(v),
                _ => None,
            }
        });

        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Invalid format: {0}")]
    Format(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::COOKIE;

    #[test]
    fn test_gen_random_string_length_and_uniqueness() {
        let a = gen_random_string(32).expect("random string");
        let b = gen_random_string(32).expect("random string");

        // 32 bytes -> 43 base64url chars without padding
        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
        assert!(!a.contains('='));
    }

    #[test]
    fn test_base64url_decode_rejects_garbage() {
        let result = base64url_decode("not*valid*base64");
        assert!(matches!(result, Err(UtilError::Format(_))));
    }

    #[test]
    fn test_header_set_cookie_attributes() {
        let mut headers = HeaderMap::new();
        header_set_cookie(
            &mut headers,
            CookieSpec {
                name: "sessionId",
                value: "abc",
                max_age: 300,
                secure: false,
            },
        )
        .expect("cookie header");

        let cookie = headers
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("Set-Cookie present");
        assert!(cookie.starts_with("sessionId=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=300"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_header_set_cookie_secure_and_negative_max_age() {
        let mut headers = HeaderMap::new();
        header_set_cookie(
            &mut headers,
            CookieSpec {
                name: "sessionId",
                value: "",
                max_age: -1,
                secure: true,
            },
        )
        .expect("cookie header");

        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.contains("Secure;"));
        assert!(cookie.contains("Max-Age=-1"));
    }

    #[test]
    fn test_cookie_value_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; sessionId=xyz; other=1"),
        );

        assert_eq!(
            cookie_value_from_headers(&headers, "sessionId").unwrap(),
            Some("xyz")
        );
        assert_eq!(cookie_value_from_headers(&headers, "missing").unwrap(), None);
    }

    #[test]
    fn test_cookie_value_from_headers_without_cookie_header() {
        let headers = HeaderMap::new();
        assert_eq!(
            cookie_value_from_headers(&headers, "sessionId").unwrap(),
            None
        );
    }

    #[test]
    fn test_cookie_value_from_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("sessionId=second"));

        assert_eq!(
            cookie_value_from_headers(&headers, "sessionId").unwrap(),
            Some("second")
        );
    }
}
