use locus::{join, split, Trailing, Url};

#[test]
fn detection() {
    assert!(Url::new("file:///home/x.tgz#gzip:/").has_sub_url());
    assert!(Url::new("file:///home/x.tgz#tar:/README").has_sub_url());
    assert!(Url::new("error:/?error=14#file:///x").has_sub_url());

    // An ordinary anchor is not a sub-URL.
    assert!(!Url::new("http://h/page.html#section-2").has_sub_url());
    assert!(!Url::new("file:///home/x.tgz").has_sub_url());
}

#[test]
fn splitting_a_chain() {
    let url = Url::new("file:///home/x.tgz#gzip:/#tar:/README");
    let chain = split(&url);

    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].url(Trailing::Leave), "file:///home/x.tgz");
    assert_eq!(chain[1].url(Trailing::Leave), "gzip:/");
    assert_eq!(chain[2].url(Trailing::Leave), "tar:/README");
}

#[test]
fn join_inverts_split() {
    for text in &[
        "file:///home/x.tgz#gzip:/#tar:/README",
        "file:///home/x.tar#tar:/dir/inner.txt",
        "file:///a.zip#zip:/b.gz#gzip:/#tar:/c",
    ] {
        let url = Url::new(text);
        assert!(url.has_sub_url(), "{:?} should nest", text);

        let rejoined = join(&split(&url));
        assert_eq!(rejoined.url(Trailing::Leave), *text);
    }
}

#[test]
fn html_reference_rides_on_every_element() {
    let url = Url::new("file:///home/x.tgz#gzip:/#tar:/doc.html#section");
    let chain = split(&url);

    assert_eq!(chain.len(), 3);
    for element in &chain {
        assert_eq!(element.fragment(), Some("section".to_string()));
    }

    assert_eq!(join(&chain).url(Trailing::Leave),
               "file:///home/x.tgz#gzip:/#tar:/doc.html#section");
}

#[test]
fn splitting_a_plain_url_yields_itself() {
    let url = Url::new("http://h/page.html#section");
    let chain = split(&url);

    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0], url);
    assert_eq!(join(&chain), url);
}

#[test]
fn join_of_nothing_is_empty() {
    assert!(!join(&[]).is_valid());
}
