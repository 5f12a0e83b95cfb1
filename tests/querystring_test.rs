use lucida::querystring::QueryStringManager;
use url::Url;

#[test]
fn test_to_object() {
    let qs = QueryStringManager::default();
    let object = qs.to_object(Some("?x=1&y=hello%20world")).unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["x"], "1");
    assert_eq!(object["y"], "hello world");
}

#[test]
fn test_get_value() {
    let qs = QueryStringManager::default();
    assert_eq!(
        qs.get_value("x", Some("?x=1&y=2")).unwrap().as_deref(),
        Some("1")
    );
    assert_eq!(qs.get_value("z", Some("?x=1&y=2")).unwrap(), None);
}

#[test]
fn test_default_input_from_location() {
    let location = Url::parse("https://example.com/search?q=rust%20lang&page=3").unwrap();
    let qs = QueryStringManager::from_location(&location);

    let object = qs.to_object(None).unwrap();
    assert_eq!(object["q"], "rust lang");
    assert_eq!(object["page"], "3");
    assert_eq!(qs.get_value("page", None).unwrap().as_deref(), Some("3"));
}

#[test]
fn test_without_leading_question_mark() {
    let qs = QueryStringManager::default();
    assert_eq!(
        qs.get_value("a", Some("a=b")).unwrap().as_deref(),
        Some("b")
    );
}

#[test]
fn test_plus_is_not_space() {
    let qs = QueryStringManager::default();
    assert_eq!(
        qs.get_value("q", Some("?q=a+b")).unwrap().as_deref(),
        Some("a+b")
    );
}

#[test]
fn test_key_is_not_decoded() {
    let qs = QueryStringManager::default();
    let object = qs.to_object(Some("?first%20name=Ada")).unwrap();
    assert_eq!(object["first%20name"], "Ada");
    assert!(!object.contains_key("first name"));
}

#[test]
fn test_value_stops_at_second_equals() {
    let qs = QueryStringManager::default();
    let object = qs.to_object(Some("a=b=c&token=x==")).unwrap();
    assert_eq!(object["a"], "b");
    assert_eq!(object["token"], "x");
}

#[test]
fn test_flag_parameter() {
    let qs = QueryStringManager::default();
    assert_eq!(
        qs.get_value("debug", Some("?debug&x=1")).unwrap().as_deref(),
        Some("")
    );
}
