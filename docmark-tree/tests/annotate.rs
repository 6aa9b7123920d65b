#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
use docmark_tree::{
  DocProcessor,
  DocTreeAnnotator,
  MarkdownOptions,
  Node,
  TransformConfig,
  html,
  json,
};

fn config() -> TransformConfig {
  TransformConfig::new("/docs/a/b.md", "https://github.com/org/repo")
}

fn annotate(fragment: &str) -> String {
  let mut tree = html::parse_fragment(fragment);
  DocTreeAnnotator::new(&config()).annotate(&mut tree);
  html::to_html(&tree)
}

fn assert_html_contains(html: &str, expected: &[&str]) {
  for &needle in expected {
    assert!(
      html.contains(needle),
      "Expected HTML to contain '{needle}', but it did not.\nFull \
       HTML:\n{html}"
    );
  }
}

#[test]
fn test_heading_structure() {
  let html = annotate("<h2>Hello <code>World</code></h2>");
  assert_html_contains(&html, &[
    r##"<h2 class="heading"><span id="hello-world"></span><a href="#hello-world">Hello <code>World</code></a><span class="permalink"><svg"##,
    "</svg></span></h2>",
  ]);
}

#[test]
fn test_duplicate_headings_across_levels() {
  let result = DocProcessor::new(MarkdownOptions::default()).render(
    "## Setup\n\ntext\n\n### Setup\n\n#### Setup\n",
    &config(),
  );
  let ids: Vec<_> = result.headers.iter().map(|h| h.id.clone()).collect();
  assert_eq!(ids, vec!["setup", "setup-1", "setup-2"]);
  let levels: Vec<_> = result.headers.iter().map(|h| h.level).collect();
  assert_eq!(levels, vec![2, 3, 4]);
}

#[test]
fn test_absolute_links_are_byte_identical() {
  for href in [
    "https://example.com/a?b=c#D",
    "HTTP://EXAMPLE.COM",
    "//cdn.example.com/x.js",
  ] {
    let mut tree = html::parse_fragment(&format!(r#"<a href="{href}">x</a>"#));
    DocTreeAnnotator::new(&config()).annotate(&mut tree);
    let anchor = tree.children().unwrap()[0].as_element().unwrap();
    assert_eq!(anchor.string_property("href"), Some(href));
    assert_eq!(anchor.string_property("className"), Some("absolute"));
    assert_eq!(anchor.string_property("target"), Some("_blank"));
    assert_eq!(anchor.string_property("rel"), Some("noopener noreferrer"));
  }
}

#[test]
fn test_repository_link_resolution() {
  let html = annotate(r#"<a href="../guide#Install Steps">guide</a>"#);
  assert_html_contains(&html, &[
    r#"href="https://github.com/org/repo/docs/guide#install-steps""#,
    r#"class="absolute""#,
  ]);
}

#[test]
fn test_docs_route_extension_stripping() {
  let html = annotate(r#"<a href="/docs/guide.md#Install Steps">guide</a>"#);
  assert_html_contains(&html, &[
    r#"<a href="/docs/guide#install-steps" class="relative">guide</a>"#,
  ]);
}

#[test]
fn test_anchor_inside_heading_is_rewritten_once() {
  let html = annotate(r#"<h3>See <a href="/docs/x.md">X</a></h3>"#);
  assert_html_contains(&html, &[
    r##"<a href="#see-x">See <a href="/docs/x" class="relative">X</a></a>"##,
  ]);
}

#[test]
fn test_card_markup() {
  let html = annotate(
    r#"<div class="card"><a href="/docs/quickstart.md"><b>Quickstart:</b> <small>Get started fast</small></a></div>"#,
  );
  assert_html_contains(&html, &[
    r#"<div class="card"><a href="/docs/quickstart" class="relative"><h4>Quickstart</h4><small>Get started fast</small></a></div>"#,
  ]);
}

#[test]
fn test_card_heading_is_not_anchored() {
  // Cards are restructured after the heading pass has run
  let mut tree = html::parse_fragment(
    r#"<div class="card"><a href="/docs/q"><b>Title</b><small>Text</small></a></div>"#,
  );
  let headers = DocTreeAnnotator::new(&config()).annotate(&mut tree);
  assert!(headers.is_empty());
  assert!(!html::to_html(&tree).contains("permalink"));
}

#[test]
fn test_markdown_card_end_to_end() {
  let markdown = r#"## Guides

<div class="card">
<a href="/docs/basics/intro.md"><b>Basics:</b><small>Learn the basics</small></a>
</div>
"#;
  let result =
    DocProcessor::new(MarkdownOptions::default()).render(markdown, &config());
  assert_html_contains(&result.html, &[
    r#"<span id="guides"></span>"#,
    r#"<a href="/docs/basics/intro" class="relative"><h4>Basics</h4><small>Learn the basics</small></a>"#,
  ]);
}

#[test]
fn test_json_tree_is_annotated() {
  let hast = r##"{
    "type": "root",
    "children": [
      {
        "type": "element",
        "tagName": "h2",
        "properties": {},
        "children": [{ "type": "text", "value": "From JSON" }]
      }
    ]
  }"##;
  let tree = json::from_str(hast).unwrap();
  let result = DocProcessor::default().annotate_tree(tree, &config());
  assert_eq!(result.headers[0].id, "from-json");

  let encoded = json::to_string_pretty(&result.tree).unwrap();
  let decoded: Node = json::from_str(&encoded).unwrap();
  assert_eq!(decoded, result.tree);
}

#[test]
fn test_malformed_markup_degrades_quietly() {
  let html = annotate(r#"<a>no href</a><a href="">empty</a><h2></h2><div class="card"></div>"#);
  assert_eq!(
    html,
    r#"<a>no href</a><a href="">empty</a><h2></h2><div class="card"></div>"#
  );
}

#[test]
fn test_leading_markdown_comment_survives() {
  let result = DocProcessor::default()
    .render("<!-- generated: do not edit -->\n\n## Intro\n", &config());
  assert!(
    result.html.starts_with("<!-- generated: do not edit -->"),
    "{}",
    result.html
  );
  assert_eq!(result.headers[0].id, "intro");
}
