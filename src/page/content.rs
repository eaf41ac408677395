//! Node body extraction.

use std::borrow::Cow;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::error::{Error, Result};

static NODE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.node").unwrap());
static CONTENT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.content").unwrap());
static NAVIGATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.book-navigation").unwrap());
static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img[src]").unwrap());

/// Extract the content container of a node page as an HTML fragment.
///
/// The fragment is the first `div.content` inside the first `div.node`, with
/// relative image sources made absolute against `base_url` and book
/// navigation blocks dropped.
pub fn extract_node_content(page_html: &str, base_url: &Url) -> Result<String> {
    let mut document = Html::parse_document(page_html);

    let (content_id, navigation, images) = {
        let node = document
            .select(&NODE)
            .next()
            .ok_or_else(|| Error::Structure("node page has no div.node".to_string()))?;

        let content = node
            .select(&CONTENT)
            .next()
            .ok_or_else(|| Error::Structure("div.node has no div.content".to_string()))?;

        let navigation: Vec<_> = content.select(&NAVIGATION).map(|e| e.id()).collect();
        let images: Vec<_> = content.select(&IMAGE).map(|e| e.id()).collect();
        (content.id(), navigation, images)
    };

    for id in images {
        if let Some(mut image) = document.tree.get_mut(id) {
            if let Node::Element(element) = image.value() {
                rewrite_src(element, base_url);
            }
        }
    }

    for id in navigation {
        if let Some(mut block) = document.tree.get_mut(id) {
            block.detach();
        }
    }

    document
        .tree
        .get(content_id)
        .and_then(ElementRef::wrap)
        .map(|content| content.html())
        .ok_or_else(|| Error::Structure("div.content is no longer in the document".to_string()))
}

/// Absolute form of an image source.
///
/// Sources starting with `http` are kept as they are.
pub fn absolutize_src<'a>(src: &'a str, base_url: &Url) -> Cow<'a, str> {
    if src.starts_with("http") {
        return Cow::Borrowed(src);
    }

    match base_url.join(src) {
        Ok(url) => Cow::Owned(url.into()),
        Err(e) => {
            tracing::warn!("Leaving image source '{}' as is: {}", src, e);
            Cow::Borrowed(src)
        }
    }
}

fn rewrite_src(element: &mut scraper::node::Element, base_url: &Url) {
    for (name, value) in element.attrs.iter_mut() {
        if name.local.as_ref() != "src" {
            continue;
        }

        let absolute = match absolutize_src(value, base_url) {
            Cow::Owned(absolute) => absolute,
            Cow::Borrowed(_) => continue,
        };
        *value = absolute.as_str().into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE_PAGE: &str = r#"
        <html><body>
        <div id="header"><div class="content">Site header</div></div>
        <div class="node node-type-book">
          <h2>Title</h2>
          <div class="content clear-block">
            <p>Intro &amp; <b>details</b></p>
            <img src="/files/a.png" alt="A">
            <img src="files/b.png">
            <img src="http://cdn.example.org/c.png">
            <div class="book-navigation">
              <ul class="menu"><li><a href="/node/2">Next</a></li></ul>
            </div>
            <p>Outro</p>
          </div>
        </div>
        <div id="footer">Footer</div>
        </body></html>
    "#;

    fn base() -> Url {
        Url::parse("http://localhost").unwrap()
    }

    #[test]
    fn test_extracts_only_content_container() {
        let fragment = extract_node_content(NODE_PAGE, &base()).unwrap();

        assert!(fragment.starts_with(r#"<div class="content clear-block">"#));
        assert!(fragment.ends_with("</div>"));
        assert!(fragment.contains("<p>Intro &amp; <b>details</b></p>"));
        assert!(fragment.contains("<p>Outro</p>"));
        assert!(!fragment.contains("Site header"));
        assert!(!fragment.contains("Footer"));
        assert!(!fragment.contains("<h2>"));
    }

    #[test]
    fn test_image_sources_are_absolute() {
        let fragment = extract_node_content(NODE_PAGE, &base()).unwrap();

        assert!(fragment.contains(r#"src="http://localhost/files/a.png""#));
        assert!(fragment.contains(r#"src="http://localhost/files/b.png""#));
        assert!(fragment.contains(r#"src="http://cdn.example.org/c.png""#));

        let document = Html::parse_fragment(&fragment);
        let img = Selector::parse("img").unwrap();
        for image in document.select(&img) {
            let src = image.value().attr("src").unwrap();
            assert!(src.starts_with("http"), "relative src left: {}", src);
        }
    }

    #[test]
    fn test_navigation_block_removed() {
        let fragment = extract_node_content(NODE_PAGE, &base()).unwrap();

        assert!(!fragment.contains("book-navigation"));
        assert!(!fragment.contains("Next"));
    }

    #[test]
    fn test_void_elements_not_closed() {
        let fragment = extract_node_content(NODE_PAGE, &base()).unwrap();
        assert!(!fragment.contains("</img>"));
    }

    #[test]
    fn test_foreign_attributes_keep_prefix() {
        let page = concat!(
            r#"<div class="node"><div class="content">"#,
            r##"<svg><use xlink:href="#icon"></use></svg>"##,
            r#"<p title="a &quot;b&quot; &amp; c">x</p>"#,
            "</div></div>"
        );
        let fragment = extract_node_content(page, &base()).unwrap();

        assert!(fragment.contains(r##"xlink:href="#icon""##), "{}", fragment);
        assert!(fragment.contains(r#"title="a &quot;b&quot; &amp; c""#), "{}", fragment);
    }

    #[test]
    fn test_nested_navigation_blocks_removed() {
        let page = concat!(
            r#"<div class="node"><div class="content"><p>Body</p>"#,
            r#"<div class="book-navigation"><div class="book-navigation">Inner</div>Outer</div>"#,
            r#"<section><div class="book-navigation">Deep</div></section>"#,
            "</div></div>"
        );
        let fragment = extract_node_content(page, &base()).unwrap();

        assert!(fragment.contains("<p>Body</p>"));
        assert!(fragment.contains("<section></section>"));
        assert!(!fragment.contains("Inner"));
        assert!(!fragment.contains("Outer"));
        assert!(!fragment.contains("Deep"));
    }

    #[test]
    fn test_missing_node_wrapper() {
        let err = extract_node_content("<div class=\"content\">x</div>", &base()).unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn test_missing_content_container() {
        let err =
            extract_node_content("<div class=\"node\"><p>x</p></div>", &base()).unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn test_absolutize_src() {
        assert_eq!(
            absolutize_src("/files/x.jpg", &base()),
            "http://localhost/files/x.jpg"
        );
        assert_eq!(
            absolutize_src("https://example.org/x.jpg", &base()),
            "https://example.org/x.jpg"
        );
        let site = Url::parse("http://cms.example.org/drupal/").unwrap();
        assert_eq!(
            absolutize_src("sites/default/files/x.jpg", &site),
            "http://cms.example.org/drupal/sites/default/files/x.jpg"
        );
    }
}
