// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the content store's mutators. Every mutation
// re-serializes the whole collection, so cost grows with collection size.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use folio_core::types::{Category, ProjectDraft, ProjectId, ProjectPatch};
use folio_store::{ContentStore, MemoryStore, SqliteStore};

fn draft(i: usize) -> ProjectDraft {
    ProjectDraft {
        title: format!("Project {i}"),
        description: "Brand identity refresh with logo, palette, and stationery".into(),
        category: Category::Branding,
        images: vec![format!("https://img.example/{i}.jpg")],
        featured: i % 3 == 0,
    }
}

fn populated(size: usize) -> ContentStore {
    let mut store = ContentStore::open(Box::new(MemoryStore::new()));
    for i in 0..size {
        store.add_project(draft(i));
    }
    store
}

/// Add-then-delete against collections of growing size (memory backend).
fn bench_add_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_delete_memory");
    for size in [4usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut store = populated(size);
            b.iter(|| {
                let id = store.add_project(black_box(draft(size)));
                store.delete_project(&id);
            });
        });
    }
    group.finish();
}

/// Single-field update on the SQLite backend.
fn bench_update_sqlite(c: &mut Criterion) {
    let sqlite = SqliteStore::open_in_memory().expect("open in-memory db");
    let mut store = ContentStore::open(Box::new(sqlite));
    let id = ProjectId::new("3");
    let mut featured = false;

    c.bench_function("update_project_sqlite (seed)", |b| {
        b.iter(|| {
            featured = !featured;
            store.update_project(
                &id,
                ProjectPatch {
                    featured: Some(black_box(featured)),
                    ..Default::default()
                },
            );
        });
    });
}

criterion_group!(benches, bench_add_delete, bench_update_sqlite);
criterion_main!(benches);
