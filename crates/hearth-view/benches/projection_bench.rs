//! Benchmarks for the home-screen projection.
//!
//! Run with: cargo bench -p hearth-view

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hearth_state::{
    Collection, CollectionId, HistoryEntry, HistoryGroup, HomeState, Loadable, Site, Story,
    StoryCategory, TabRef,
};
use hearth_view::project;
use std::collections::BTreeSet;
use std::hint::black_box;

fn populated_state(scale: usize) -> HomeState {
    let sites = (0..scale)
        .map(|i| Site {
            url: format!("https://site{i}.example"),
            title: format!("Site {i}"),
            pinned: i % 4 == 0,
        })
        .collect();
    let collections: Vec<_> = (0..scale)
        .map(|i| Collection {
            id: CollectionId(i as u64),
            title: format!("Collection {i}"),
            tabs: Vec::new(),
        })
        .collect();
    let expanded: BTreeSet<_> = collections.iter().step_by(2).map(|c| c.id).collect();
    let tabs = (0..scale)
        .map(|i| TabRef {
            id: format!("tab-{i}"),
            url: format!("https://tab{i}.example"),
            title: format!("Tab {i}"),
        })
        .collect();
    let groups = (0..scale)
        .map(|i| HistoryGroup {
            title: format!("group {i}"),
            entries: vec![HistoryEntry {
                url: format!("https://visit{i}.example"),
                title: format!("Visit {i}"),
            }],
        })
        .collect();
    let categories = (0..scale)
        .map(|i| StoryCategory {
            name: format!("category {i}"),
            stories: vec![Story {
                title: format!("Story {i}"),
                url: format!("https://story{i}.example"),
                publisher: "pub".into(),
                sponsored: false,
            }],
        })
        .collect();

    HomeState {
        top_sites: Loadable::ready(sites),
        collections: Loadable::ready(collections),
        expanded_collections: expanded,
        recent_tabs: Loadable::ready(tabs),
        history_highlights: Loadable::ready(groups),
        recommended: Loadable::ready(categories),
        ..HomeState::default()
    }
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for scale in [4usize, 16, 64] {
        let state = populated_state(scale);
        group.bench_with_input(BenchmarkId::new("normal", scale), &state, |b, state| {
            b.iter(|| project(black_box(state)));
        });
    }

    let mut private = populated_state(64);
    private.mode = hearth_state::Mode::Private;
    group.bench_function("private", |b| {
        b.iter(|| project(black_box(&private)));
    });

    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);
