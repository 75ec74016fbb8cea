use multival_core::settings::{
    split_list, split_pairs, DEFAULT_LIST_SEPARATOR, DEFAULT_PAIR_SEPARATOR,
};

#[test]
fn list_items_are_trimmed() {
    assert_eq!(
        split_list(" red, green ,blue ", DEFAULT_LIST_SEPARATOR),
        vec!["red", "green", "blue"]
    );
}

#[test]
fn list_blank_text_is_empty() {
    assert!(split_list("", ",").is_empty());
    assert!(split_list("   ", ",").is_empty());
}

#[test]
fn list_keeps_empty_items_between_separators() {
    assert_eq!(split_list("a,,b", ","), vec!["a", "", "b"]);
}

#[test]
fn list_multichar_and_empty_separator() {
    assert_eq!(split_list("a::b::c", "::"), vec!["a", "b", "c"]);
    assert_eq!(split_list(" a,b ", ""), vec!["a,b"]);
}

#[test]
fn pairs_build_an_ordered_mapping() {
    let m = split_pairs(
        "host;db01, port;5432, debug",
        DEFAULT_LIST_SEPARATOR,
        DEFAULT_PAIR_SEPARATOR,
    );
    let keys: Vec<&str> = m.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["host", "port", "debug"]);
    assert_eq!(m.get_as_string("host"), "db01");
    assert_eq!(m.get_as_u32("port"), 5432);
    assert_eq!(m.get_as_string("debug"), "");
}

#[test]
fn pairs_first_occurrence_wins() {
    let m = split_pairs("a;1,a;2,b;3", ",", ";");
    assert_eq!(m.len(), 2);
    assert_eq!(m.get_as_i32("a"), 1);
}

#[test]
fn pairs_skip_blank_keys_and_extra_parts() {
    let m = split_pairs(";orphan, , k;v;extra", ",", ";");
    assert_eq!(m.len(), 1);
    assert_eq!(m.get_as_string("k"), "v");
}

#[test]
fn pairs_custom_separators() {
    let m = split_pairs("x=1 | y=2", "|", "=");
    assert_eq!(m.get_as_i32("x"), 1);
    assert_eq!(m.get_as_i32("y"), 2);
}

#[test]
fn pairs_blank_text_is_empty() {
    assert!(split_pairs("", ",", ";").is_empty());
}
