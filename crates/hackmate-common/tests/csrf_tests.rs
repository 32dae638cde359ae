use hackmate_common::csrf::*;

#[test]
fn finds_token_among_other_cookies() {
    let cookies = "sessionid=abc123; csrftoken=Xy9zT0k3n; theme=dark";
    assert_eq!(csrf_token(cookies), "Xy9zT0k3n");
}

#[test]
fn finds_token_in_first_position() {
    assert_eq!(csrf_token("csrftoken=first;other=1"), "first");
}

#[test]
fn missing_token_is_empty() {
    assert_eq!(csrf_token("sessionid=abc123; theme=dark"), "");
}

#[test]
fn empty_cookie_string_is_empty() {
    assert_eq!(csrf_token(""), "");
}

#[test]
fn similar_names_do_not_match() {
    let cookies = "xcsrftoken=nope; csrftoken_old=nope";
    assert_eq!(csrf_token(cookies), "");
}

#[test]
fn cookie_value_stops_at_second_equals() {
    assert_eq!(cookie_value("data=a=b; x=1", "data"), Some("a"));
    assert_eq!(csrf_token("csrftoken=abc=def"), "abc");
}

#[test]
fn cookie_without_value() {
    assert_eq!(cookie_value("flag; x=1", "flag"), Some(""));
    assert_eq!(cookie_value("flag; x=1", "y"), None);
}
