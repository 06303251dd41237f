use portal_fs::NormalizedPath;
use rstest::rstest;

#[rstest]
#[case("foo/bar/baz", "foo/bar/baz")]
#[case("foo\\bar\\baz", "foo/bar/baz")]
#[case("foo/bar\\baz", "foo/bar/baz")]
fn test_normalize_slashes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("workspace/app");
    assert_eq!(base.join("package.json").as_str(), "workspace/app/package.json");

    let trailing = NormalizedPath::new("workspace/");
    assert_eq!(trailing.join("package.json").as_str(), "workspace/package.json");
}

#[rstest]
#[case("foo/bar/baz", Some("foo/bar"))]
#[case("foo/bar/", Some("foo"))]
#[case("/foo", Some("/"))]
#[case("/", None)]
#[case("foo", None)]
fn test_parent(#[case] input: &str, #[case] expected: Option<&str>) {
    let parent = NormalizedPath::new(input).parent();
    assert_eq!(parent.as_ref().map(NormalizedPath::as_str), expected);
}

#[test]
fn test_canonical_falls_back_for_missing_path() {
    let path = NormalizedPath::canonical("/nonexistent/portal/path");
    assert_eq!(path.as_str(), "/nonexistent/portal/path");
}
