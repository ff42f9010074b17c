//! Session cookie parsing and `Set-Cookie` rendering.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Value of cookie `name` from the request's `Cookie` headers, if non-empty.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value for a freshly issued session token.
///
/// Always `HttpOnly`, `SameSite=Lax` and scoped to `/`.
pub fn session_cookie(name: &str, token: &str, max_age_secs: u64, secure: bool) -> String {
    let mut cookie = format!("{name}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that makes the browser drop the session cookie.
pub fn expired_session_cookie(name: &str, secure: bool) -> String {
    session_cookie(name, "", 0, secure)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        headers
    }

    #[test]
    fn finds_named_cookie_among_others() {
        let h = headers(&["theme=dark; authToken=abc.def; lang=en"]);
        assert_eq!(read_cookie(&h, "authToken").as_deref(), Some("abc.def"));
    }

    #[test]
    fn searches_every_cookie_header() {
        let h = headers(&["theme=dark", "authToken=xyz"]);
        assert_eq!(read_cookie(&h, "authToken").as_deref(), Some("xyz"));
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        assert_eq!(read_cookie(&headers(&[]), "authToken"), None);
        assert_eq!(read_cookie(&headers(&["authToken="]), "authToken"), None);
        assert_eq!(read_cookie(&headers(&["xauthToken=1"]), "authToken"), None);
    }

    #[test]
    fn session_cookie_attributes() {
        assert_eq!(
            session_cookie("authToken", "t0k", 600, false),
            "authToken=t0k; Path=/; Max-Age=600; HttpOnly; SameSite=Lax"
        );
        assert!(session_cookie("authToken", "t0k", 600, true).ends_with("; Secure"));
        assert!(expired_session_cookie("authToken", false).starts_with("authToken=; Path=/; Max-Age=0"));
    }
}
