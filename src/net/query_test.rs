use super::*;

#[test]
fn encode_preserves_insertion_order() {
    let q = QueryParams::new().push("page", 2).push("limit", 10);
    assert_eq!(q.encode(), "page=2&limit=10");

    let q = QueryParams::new().push("limit", 10).push("page", 2);
    assert_eq!(q.encode(), "limit=10&page=2");
}

#[test]
fn push_opt_skips_absent_values() {
    let q = QueryParams::new()
        .push_opt("page", Some(1))
        .push_opt::<u32>("limit", None)
        .push_opt("status", Some("shipped"));
    assert_eq!(q.encode(), "page=1&status=shipped");
}

#[test]
fn encode_urlencodes_values() {
    let q = QueryParams::new().push("q", "dark chocolate & nuts");
    assert_eq!(q.encode(), "q=dark+chocolate+%26+nuts");
}

#[test]
fn apply_to_omits_question_mark_when_empty() {
    assert_eq!(QueryParams::new().apply_to("/orders"), "/orders");
    assert_eq!(QueryParams::new().push("page", 3).apply_to("/orders"), "/orders?page=3");
}
