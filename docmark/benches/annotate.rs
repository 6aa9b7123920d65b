#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  reason = "Fine in benchmarks"
)]
use std::{fmt::Write, hint::black_box};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docmark_tree::{
  DocProcessor,
  DocTreeAnnotator,
  MarkdownOptions,
  TransformConfig,
  html,
};

const MARKDOWN_SMALL: &str = r#"# Getting Started

## Install

Grab a release from [GitHub](https://github.com/org/repo/releases) or read
the [build notes](../BUILDING.md#From Source).

## Configure

See [the reference](/docs/reference/config.md#Repo URL).

<div class="card">
<a href="/docs/basics/intro.md"><b>Basics:</b><small>Learn the basics</small></a>
</div>
"#;

/// A page with many sections, repeated headings and every link kind.
fn markdown_large() -> String {
  let mut doc = String::from("# Reference\n\n");
  for i in 0..200 {
    let _ = write!(
      doc,
      "## Section {i}\n\nText with [an external link](https://example.com/{i}), \
       [a repository file](../src/lib{i}.rs) and [a page](/docs/page{i}.md#Part \
       {i}).\n\n### Details\n\n- one\n- two\n\n"
    );
  }
  doc
}

fn config() -> TransformConfig {
  TransformConfig::new("/docs/guide/start.md", "https://github.com/org/repo")
}

fn bench_render(c: &mut Criterion) {
  let mut group = c.benchmark_group("render");
  let processor = DocProcessor::new(MarkdownOptions::default());
  let config = config();
  let large = markdown_large();

  group.bench_with_input(
    BenchmarkId::new("markdown", "small"),
    &MARKDOWN_SMALL,
    |b, markdown| {
      b.iter(|| processor.render(black_box(markdown), black_box(&config)));
    },
  );

  group.bench_with_input(
    BenchmarkId::new("markdown", "large"),
    &large.as_str(),
    |b, markdown| {
      b.iter(|| processor.render(black_box(markdown), black_box(&config)));
    },
  );

  group.finish();
}

fn bench_annotate(c: &mut Criterion) {
  let mut group = c.benchmark_group("annotate");
  let config = config();
  let options = MarkdownOptions::default();

  // Parse once, then only measure the tree passes
  for (name, markdown) in [
    ("small", MARKDOWN_SMALL.to_owned()),
    ("large", markdown_large()),
  ] {
    let tree = docmark_tree::markdown::to_tree(&markdown, options);
    group.bench_with_input(BenchmarkId::new("tree", name), &tree, |b, tree| {
      b.iter(|| {
        let mut tree = tree.clone();
        DocTreeAnnotator::new(black_box(&config)).annotate(&mut tree)
      });
    });
  }

  let page = html::to_html(&docmark_tree::markdown::to_tree(
    &markdown_large(),
    options,
  ));
  group.bench_with_input(
    BenchmarkId::new("html_round_trip", "large"),
    &page,
    |b, page| {
      b.iter(|| {
        let mut tree = html::parse_fragment(black_box(page));
        DocTreeAnnotator::new(&config).annotate(&mut tree);
        html::to_html(&tree)
      });
    },
  );

  group.finish();
}

criterion_group!(benches, bench_render, bench_annotate);
criterion_main!(benches);
