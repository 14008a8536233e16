// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ltcx_model::{Graph, LatticeModel, Units};
use ltcx_parser::{graph_types_str, LtcxReader, LtcxWriter};

/// Cubic grid of `n^3` nodes with beams along each axis
fn grid_model(n: u32) -> LatticeModel {
    let mut graph = Graph::new("grid", 0, Units::Mm);
    let index = |i: u32, j: u32, k: u32| (i * n + j) * n + k;

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                graph.add_node(i as f64, j as f64, k as f64, Some(0.25));
                if i + 1 < n {
                    graph.add_beam(index(i, j, k), index(i + 1, j, k));
                }
                if j + 1 < n {
                    graph.add_beam(index(i, j, k), index(i, j + 1, k));
                }
                if k + 1 < n {
                    graph.add_beam(index(i, j, k), index(i, j, k + 1));
                }
            }
        }
    }

    LatticeModel::from(vec![graph])
}

fn bench_read_write(c: &mut Criterion) {
    let model = grid_model(20);
    let writer = LtcxWriter::new();
    let text = writer.write_string(&model).expect("grid serializes");

    c.bench_function("write 8k node grid", |b| {
        b.iter(|| writer.write_string(black_box(&model)))
    });

    let reader = LtcxReader::new();
    c.bench_function("read 8k node grid", |b| {
        b.iter(|| reader.read_str(black_box(&text)))
    });

    c.bench_function("scan graph types", |b| {
        b.iter(|| graph_types_str(black_box(&text)))
    });
}

criterion_group!(benches, bench_read_write);
criterion_main!(benches);
