use locus::{resolve, Trailing, Url};

fn base() -> Url {
    Url::new("http://www.website.com/directory/?hello#ref")
}

fn resolved(reference: &str) -> String {
    resolve(&base(), reference).url(Trailing::Leave)
}

#[test]
fn sibling_file() {
    // Neither the query nor the fragment of the base carries over.
    assert_eq!(resolved("relative.html"),
               "http://www.website.com/directory/relative.html");
}

#[test]
fn parent_directory() {
    assert_eq!(resolved("../relative.html"),
               "http://www.website.com/relative.html");
}

#[test]
fn authority_relative() {
    assert_eq!(resolved("//www.kde.org/relative.html"),
               "http://www.kde.org/relative.html");
}

#[test]
fn root_relative() {
    assert_eq!(resolved("/absolute.html"),
               "http://www.website.com/absolute.html");
}

#[test]
fn empty_reference_is_the_base() {
    assert_eq!(resolved(""), base().url(Trailing::Leave));
}

#[test]
fn fragment_only() {
    assert_eq!(resolved("#other"),
               "http://www.website.com/directory/?hello#other");
}

#[test]
fn query_only() {
    assert_eq!(resolved("?fresh=1"),
               "http://www.website.com/directory/?fresh=1");

    let bare = Url::new("http://www.website.com");
    assert_eq!(resolve(&bare, "?q").url(Trailing::Leave), "http://www.website.com/?q");
}

#[test]
fn absolute_reference_wins() {
    assert_eq!(resolved("ftp://elsewhere.example/file"),
               "ftp://elsewhere.example/file");
}

#[test]
fn redundant_scheme_prefix_loophole() {
    // `http:/index.html` is historically tolerated as a relative
    // reference with a redundant scheme.
    assert_eq!(resolved("http:/index.html"),
               "http://www.website.com/index.html");

    // With a real authority it is absolute as usual.
    assert_eq!(resolved("http://other.example/index.html"),
               "http://other.example/index.html");
}

#[test]
fn dot_segments_collapse() {
    assert_eq!(resolved("./here/../there/file.html"),
               "http://www.website.com/directory/there/file.html");
    assert_eq!(resolved("../../../../too/far.html"),
               "http://www.website.com/too/far.html");
}

#[test]
fn userinfo_is_inherited_when_the_place_matches() {
    let authed = Url::new("http://user:pw@www.website.com/directory/");

    let same_place = resolve(&authed, "http://www.website.com/other.html");
    assert_eq!(same_place.user_name(), Some("user"));

    let elsewhere = resolve(&authed, "http://other.example/other.html");
    assert_eq!(elsewhere.user_name(), None);
}

#[test]
fn file_authority_relative_is_a_path() {
    let file_base = Url::new("file:///home/user/doc.html");

    assert_eq!(resolve(&file_base, "//etc/passwd").url(Trailing::Leave),
               "file:///etc/passwd");
    assert_eq!(resolve(&file_base, "notes.txt").url(Trailing::Leave),
               "file:///home/user/notes.txt");
}

#[test]
fn resolution_is_deterministic() {
    for reference in &["relative.html", "../up.html", "?q", "#f", "//www.kde.org/x"] {
        assert_eq!(resolve(&base(), reference), resolve(&base(), reference));
    }
}
