use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use bedrock_addon::block::{Block, BlockComponent, BlockFile, MaterialInstance};
use bedrock_addon::{ContentWriter, OrderedMap, Permutation, Shorthand};

fn make_block(permutations: u8) -> BlockFile {
    let mut block = Block::new("bench:lamp")
        .with_component(BlockComponent::DestructibleByMining(Shorthand::Short(true)))
        .with_component(BlockComponent::Friction(0.4))
        .with_component(BlockComponent::MaterialInstances(
            OrderedMap::new().with("*", MaterialInstance::new("lamp")),
        ));

    // One permutation per light level, like a dimmable lamp.
    for level in 0..permutations {
        block = block.with_permutation(
            Permutation::new(format!("q.block_state('bench:level') == {level}"))
                .with(BlockComponent::LightEmission(level % 16))
                .with_custom("bench:hum", serde_json::json!({ "pitch": f64::from(level) * 0.1 })),
        );
    }
    BlockFile::new(block)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let writer = ContentWriter::default();
    let small = make_block(0);
    let large = make_block(64);

    group.bench_function("block_plain", |b| {
        b.iter(|| writer.render(black_box(&small)).unwrap());
    });
    group.bench_function("block_64_permutations", |b| {
        b.iter(|| writer.render(black_box(&large)).unwrap());
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = ContentWriter::default().render(&make_block(64)).unwrap();

    c.bench_function("parse/block_64_permutations", |b| {
        b.iter(|| serde_json::from_str::<BlockFile>(black_box(&text)).unwrap());
    });
}

fn bench_save_blocking(c: &mut Criterion) {
    c.bench_function("save/blocking", |b| {
        // Fresh directory per sample, setup excluded from timing.
        b.iter_custom(|iters| {
            let dir = tempfile::tempdir().unwrap();
            let writer = ContentWriter::default();
            let record = make_block(8);

            let start = Instant::now();
            for _ in 0..iters {
                writer.save_blocking(&record, dir.path()).unwrap();
            }
            start.elapsed()
        });
    });
}

criterion_group!(render, bench_render, bench_parse, bench_save_blocking);
criterion_main!(render);
