//! # BART Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Hashing | MD5 content address over typical icon sizes |
//! | Store | in-memory put/get |
//! | Service | upload, retrieve, cleared-icon retrieve |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;

use rc_10_bart::domain::{subgroups, FOOD_GROUP_BART};
use rc_10_bart::{
    BartApi, BartDownloadQuery, BartId, BartType, BartUploadQuery, ContentStore, IconHash,
    InMemoryContentStore, SnacFrame,
};
use server_runtime::{ServerConfig, ServiceContainer};
use shared_types::entities::{ScreenName, Session};

/// Icon sizes seen in practice: small, regular, and the 7 KiB client maximum.
const ICON_SIZES: [usize; 3] = [256, 2048, 7168];

fn random_icon(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

// ============================================================================
// Hashing
// ============================================================================

fn bench_icon_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("bart-hash");

    for size in ICON_SIZES {
        let data = random_icon(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("md5_digest", size), &data, |b, data| {
            b.iter(|| black_box(IconHash::digest(data)))
        });
    }

    group.finish();
}

// ============================================================================
// Content store
// ============================================================================

fn bench_memory_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("bart-store");

    let store = InMemoryContentStore::new();
    let hashes: Vec<IconHash> = (0..1000)
        .map(|_| {
            let data = random_icon(2048);
            let hash = IconHash::digest(&data);
            rt.block_on(store.put(&hash, &data)).expect("put");
            hash
        })
        .collect();

    group.bench_function("get_hit", |b| {
        let mut i = 0;
        b.to_async(&rt).iter(|| {
            i = (i + 1) % hashes.len();
            let hash = hashes[i];
            let store = &store;
            async move { black_box(store.get(&hash).await.expect("get")) }
        })
    });

    let data = random_icon(2048);
    let hash = IconHash::digest(&data);
    group.bench_function("put_existing", |b| {
        b.to_async(&rt)
            .iter(|| async { store.put(&hash, &data).await.expect("put") })
    });

    group.finish();
}

// ============================================================================
// Service
// ============================================================================

fn bench_service(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let container = Arc::new(ServiceContainer::new(ServerConfig::default()));
    let alice = Session::new("alice");
    let mut group = c.benchmark_group("bart-service");

    for size in ICON_SIZES {
        let data = random_icon(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("upload", size), &data, |b, data| {
            b.to_async(&rt).iter(|| async {
                container
                    .bart
                    .upsert_item(
                        &alice,
                        SnacFrame::new(FOOD_GROUP_BART, subgroups::UPLOAD_QUERY, 1),
                        BartUploadQuery::new(BartType::BUDDY_ICON, data.clone()),
                    )
                    .await
                    .expect("upload")
            })
        });
    }

    let data = random_icon(2048);
    let id = rt
        .block_on(container.bart.upsert_item(
            &alice,
            SnacFrame::new(FOOD_GROUP_BART, subgroups::UPLOAD_QUERY, 1),
            BartUploadQuery::new(BartType::BUDDY_ICON, data),
        ))
        .expect("seed upload")
        .body
        .id;

    for (name, id) in [
        ("retrieve_known", id),
        ("retrieve_cleared", BartId::cleared(BartType::BUDDY_ICON)),
    ] {
        group.bench_function(name, |b| {
            b.to_async(&rt).iter(|| async {
                container
                    .bart
                    .retrieve_item(
                        &alice,
                        SnacFrame::new(FOOD_GROUP_BART, subgroups::DOWNLOAD_QUERY, 2),
                        BartDownloadQuery {
                            screen_name: ScreenName::new("alice"),
                            id: id.clone(),
                        },
                    )
                    .await
                    .expect("retrieve")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_icon_hash, bench_memory_store, bench_service);
criterion_main!(benches);
