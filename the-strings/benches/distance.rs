//! Benchmarks for edit distance.
//!
//! Run with: `cargo bench -p the-strings`

use divan::{
  Bencher,
  black_box,
};
use the_strings::distance::{
  levenshtein,
  similarity,
};

fn main() {
  divan::main();
}

fn make_text(size: usize, seed: &str) -> String {
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(seed);
  }
  s.truncate(size);
  s
}

#[divan::bench(args = [16, 256, 4_096])]
fn identical(bencher: Bencher, size: usize) {
  let a = make_text(size, "The quick brown fox jumps over the lazy dog. ");
  let b = a.clone();
  bencher.bench(|| levenshtein(black_box(&a), black_box(&b)));
}

#[divan::bench(args = [16, 256, 4_096])]
fn shifted(bencher: Bencher, size: usize) {
  let a = make_text(size, "The quick brown fox jumps over the lazy dog. ");
  let b = make_text(size, "he quick brown fox jumps over the lazy dog. T");
  bencher.bench(|| levenshtein(black_box(&a), black_box(&b)));
}

#[divan::bench(args = [16, 256, 4_096])]
fn disjoint(bencher: Bencher, size: usize) {
  let a = make_text(size, "aaaaaaaa");
  let b = make_text(size, "bbbbbbbb");
  bencher.bench(|| levenshtein(black_box(&a), black_box(&b)));
}

#[divan::bench(args = [16, 256])]
fn asymmetric_lengths(bencher: Bencher, size: usize) {
  // The rolling row is sized to the shorter input; exercise the swap.
  let a = make_text(size, "mismatched inputs ");
  let b = make_text(size * 16, "the other side is much longer ");
  bencher.bench(|| levenshtein(black_box(&a), black_box(&b)));
}

#[divan::bench]
fn similarity_short(bencher: Bencher) {
  bencher.bench(|| similarity(black_box("kitten"), black_box("sitting")));
}
