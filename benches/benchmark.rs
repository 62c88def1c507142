use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use treevis::model::{TreeInput, build_tree};
use treevis::visitor::evaluate;

const NODE_COUNTS: &[(&str, usize)] = &[("10k", 10_000), ("100k", 100_000)];

fn path_input(node_count: usize) -> TreeInput {
    let values = (0..node_count as i64).collect();
    let colors = (0..node_count as i64).map(|i| i % 2).collect();
    let edges = (1..node_count as i64).map(|i| (i, i + 1)).collect();
    TreeInput::new(node_count, values, colors, edges).unwrap()
}

fn star_input(node_count: usize) -> TreeInput {
    let values = (0..node_count as i64).collect();
    let colors = (0..node_count as i64).map(|i| i % 2).collect();
    let edges = (2..=node_count as i64).map(|i| (1, i)).collect();
    TreeInput::new(node_count, values, colors, edges).unwrap()
}

fn build_and_evaluate(input: &TreeInput) {
    let tree = build_tree(input);
    black_box(evaluate(&tree));
}

fn path_trees(c: &mut Criterion) {
    for (name, node_count) in NODE_COUNTS {
        let input = path_input(*node_count);
        c.bench_function(&format!("path-{name}"), |b| {
            b.iter(|| build_and_evaluate(&input));
        });
    }
}

fn star_trees(c: &mut Criterion) {
    for (name, node_count) in NODE_COUNTS {
        let input = star_input(*node_count);
        c.bench_function(&format!("star-{name}"), |b| {
            b.iter(|| build_and_evaluate(&input));
        });
    }
}

fn parse_sample(c: &mut Criterion) {
    let node_count = 10_000;
    let mut text = format!("{node_count}\n");
    text.push_str(&(1..=node_count).map(|i| i.to_string()).collect::<Vec<_>>().join(" "));
    text.push('\n');
    text.push_str(&(0..node_count).map(|i| (i % 2).to_string()).collect::<Vec<_>>().join(" "));
    text.push('\n');
    for i in 2..=node_count {
        text.push_str(&format!("{} {}\n", i / 2, i));
    }

    c.bench_function("evaluate-str-10k", |b| {
        b.iter(|| treevis::evaluate_str(black_box(&text)).unwrap());
    });
}

criterion_group!(regression, path_trees, star_trees);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = parse_sample
}
criterion_main!(regression, reporting);
