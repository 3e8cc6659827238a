//! End-to-end tests: YAML text and a cursor in, formatted path out.

use yaml_path::document::node::NodeKind;
use yaml_path::document::parser::parse_documents;
use yaml_path::path_at_point;
use yaml_path::yamlpath::{
    resolve_documents, DottedFormatter, Locator, PathFormat, PathFormatter, SlashFormatter,
    SlashOptions, YamlPathError,
};

const DEPLOYMENT: &str = "top:
  first:
    - name: myname
      attr1: val1
      attr2: val2
      #       ^
    - value2
    - value3
  second:
    child1: value1
    child1: value2
    child3: value3
";

const CONFLICTING: &str = "top:
  first:
    - name: myname
      attr1: val1
      attr2: val2
      #       ^
    - name: myname
      attr1: val1
      attr2: val2
    - value2
    - value3
";

fn bosh(separator: &str, name_attribute: &str) -> SlashFormatter {
    SlashFormatter::new(SlashOptions {
        separator: separator.to_string(),
        name_attribute: name_attribute.to_string(),
    })
}

#[test]
fn test_bosh_uses_name_selector() {
    let path = path_at_point(DEPLOYMENT, &Locator::new(5, 14), &bosh("/", "name")).unwrap();
    assert_eq!(path, "/top/first/name=myname/attr2");
}

#[test]
fn test_jsonpath() {
    let path = path_at_point(DEPLOYMENT, &Locator::new(5, 14), &DottedFormatter).unwrap();
    assert_eq!(path, "$.top.first[0].attr2");
}

#[test]
fn test_bosh_without_matching_attribute() {
    let path = path_at_point(DEPLOYMENT, &Locator::new(5, 14), &bosh("/", "dummy")).unwrap();
    assert_eq!(path, "/top/first/0/attr2");
}

#[test]
fn test_bosh_conflicting_names_fall_back_to_indices() {
    let formatter = bosh("/", "name");

    let first = path_at_point(CONFLICTING, &Locator::new(5, 14), &formatter).unwrap();
    assert_eq!(first, "/top/first/0/attr2");

    let second = path_at_point(CONFLICTING, &Locator::new(9, 14), &formatter).unwrap();
    assert_eq!(second, "/top/first/1/attr2");
}

#[test]
fn test_sequence_scalar_element() {
    let bosh_path = path_at_point(DEPLOYMENT, &Locator::new(7, 7), &bosh("/", "name")).unwrap();
    assert_eq!(bosh_path, "/top/first/1");

    let json_path = path_at_point(DEPLOYMENT, &Locator::new(7, 7), &DottedFormatter).unwrap();
    assert_eq!(json_path, "$.top.first[1]");
}

#[test]
fn test_key_under_cursor() {
    let path = path_at_point(DEPLOYMENT, &Locator::new(9, 4), &DottedFormatter).unwrap();
    assert_eq!(path, "$.top.second");
}

#[test]
fn test_line_only_locator() {
    let path = path_at_point(DEPLOYMENT, &Locator::Line(3), &bosh("/", "name")).unwrap();
    assert_eq!(path, "/top/first/name=myname/name");
}

#[test]
fn test_duplicate_keys_each_resolve_to_their_own_line() {
    let first = path_at_point(DEPLOYMENT, &Locator::new(10, 13), &DottedFormatter).unwrap();
    let second = path_at_point(DEPLOYMENT, &Locator::new(11, 13), &DottedFormatter).unwrap();
    assert_eq!(first, "$.top.second.child1");
    assert_eq!(second, "$.top.second.child1");
}

#[test]
fn test_token_not_found() {
    let err = path_at_point(DEPLOYMENT, &Locator::new(6, 14), &DottedFormatter).unwrap_err();
    assert!(matches!(err, YamlPathError::TokenNotFound { .. }));
    assert_eq!(err.to_string(), "token not found by {line: 6, col: 14}");

    let err = path_at_point(DEPLOYMENT, &Locator::Line(200), &DottedFormatter).unwrap_err();
    assert_eq!(err.to_string(), "token not found by {line: 200}");
}

#[test]
fn test_invalid_yaml() {
    let err = path_at_point("top: -", &Locator::Line(1), &DottedFormatter).unwrap_err();
    assert!(matches!(err, YamlPathError::ParseFailure { .. }));
}

#[test]
fn test_multiple_documents() {
    let source = "first:\n  - document\n---\nsecond:\n  - document\n";

    let path = path_at_point(source, &Locator::Line(5), &bosh("/", "name")).unwrap();
    assert_eq!(path, "/second/0");

    let path = path_at_point(source, &Locator::Line(2), &DottedFormatter).unwrap();
    assert_eq!(path, "$.first[0]");
}

#[test]
fn test_omitted_mapping_value_stays_on_its_key_line() {
    let source = "a:\nb: 1\n";
    assert_eq!(
        path_at_point(source, &Locator::Line(1), &DottedFormatter).unwrap(),
        "$.a"
    );
    assert_eq!(
        path_at_point(source, &Locator::Line(2), &DottedFormatter).unwrap(),
        "$.b"
    );
}

#[test]
fn test_bare_sequence_entries() {
    let source = "list:\n-\n- b\n";
    assert_eq!(
        path_at_point(source, &Locator::Line(2), &DottedFormatter).unwrap(),
        "$.list[0]"
    );
    assert_eq!(
        path_at_point(source, &Locator::Line(2), &bosh("/", "name")).unwrap(),
        "/list/0"
    );

    let trailing = "- a\n-\n";
    assert_eq!(
        path_at_point(trailing, &Locator::Line(2), &DottedFormatter).unwrap(),
        "$[1]"
    );
}

#[test]
fn test_nested_sequences() {
    let source = "matrix:\n  - - a\n    - b\n  - - c\n";
    let path = path_at_point(source, &Locator::Line(3), &DottedFormatter).unwrap();
    assert_eq!(path, "$.matrix[0][1]");

    let path = path_at_point(source, &Locator::Line(4), &bosh("/", "name")).unwrap();
    assert_eq!(path, "/matrix/1/0");
}

#[test]
fn test_flow_mapping_in_sequence() {
    let source = "jobs: [{name: web, port: 80}, {name: db, port: 5432}]\n";
    let path = path_at_point(source, &Locator::new(1, 49), &bosh("/", "name")).unwrap();
    assert_eq!(path, "/jobs/name=db/port");
}

#[test]
fn test_root_sequence() {
    let source = "- a\n- b\n";
    assert_eq!(
        path_at_point(source, &Locator::Line(2), &DottedFormatter).unwrap(),
        "$[1]"
    );
    assert_eq!(
        path_at_point(source, &Locator::Line(2), &bosh("/", "name")).unwrap(),
        "/1"
    );
}

#[test]
fn test_resolved_path_starts_at_document_and_ends_at_leaf() {
    let docs = parse_documents(DEPLOYMENT).unwrap();
    let path = resolve_documents(&Locator::new(12, 13), &docs).unwrap();

    assert_eq!(path.root().unwrap().kind(), NodeKind::Document);
    let leaf = path.leaf().unwrap();
    assert_eq!(leaf.kind(), NodeKind::Scalar);
    assert_eq!(leaf.value(), "value3");
}

#[test]
fn test_both_formatters_agree_on_valid_paths() {
    let docs = parse_documents(DEPLOYMENT).unwrap();
    let options = SlashOptions::default();

    for line in [1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12] {
        let path = resolve_documents(&Locator::Line(line), &docs).unwrap();
        for format in [PathFormat::Bosh, PathFormat::JsonPath] {
            let formatter = format.formatter(options.clone());
            let once = formatter.format(&path).unwrap();
            let twice = formatter.format(&path).unwrap();
            assert_eq!(once, twice, "line {} format {}", line, format);
        }
    }
}

#[test]
fn test_resolving_from_several_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let formatter = bosh(if i % 2 == 0 { "/" } else { "." }, "name");
                path_at_point(DEPLOYMENT, &Locator::new(5, 14), &formatter).unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], "/top/first/name=myname/attr2");
    assert_eq!(results[1], ".top.first.name=myname.attr2");
}
