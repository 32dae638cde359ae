/// Name of the cookie Django stores the CSRF token in.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header mutating requests carry the token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Look up a cookie by name in a `document.cookie` style string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let mut parts = pair.trim().split('=');
        let key = parts.next().unwrap_or_default();
        // Only the segment between the first and second `=` is the value.
        (key == name).then(|| parts.next().unwrap_or_default())
    })
}

/// The CSRF token, or an empty string when the cookie is absent.
///
/// A missing token is sent as-is; the server rejects the request.
pub fn csrf_token(cookies: &str) -> String {
    cookie_value(cookies, CSRF_COOKIE)
        .unwrap_or_default()
        .to_string()
}
