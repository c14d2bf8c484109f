//! Benchmarks for the local answer path
//!
//! - Keyword rule matching for early, late and missing matches
//! - Full orchestration with an unconfigured client (no network)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use steward::domain::models::{AgentId, RemoteConfig};
use steward::infrastructure::bedrock::BedrockClient;
use steward::services::fallback::fallback;
use steward::services::{Orchestrator, OrchestratorSettings};

const QUESTIONS: [(&str, &str); 3] = [
    ("first_rule", "Were there any violations overnight?"),
    ("last_rule", "What is our GDPR status?"),
    ("no_match", "Summarise the quarterly board pack for the governance committee please"),
];

fn bench_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback");
    for (name, question) in QUESTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), question, |b, question| {
            b.iter(|| fallback(black_box(AgentId::Compliance), black_box(question)));
        });
    }
    group.finish();
}

fn bench_offline_respond(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = BedrockClient::new(RemoteConfig::default()).unwrap();
    let orchestrator = Orchestrator::new(Arc::new(client), OrchestratorSettings::default());

    c.bench_function("offline_respond", |b| {
        b.to_async(&runtime).iter(|| async {
            orchestrator
                .respond(AgentId::Privacy, black_box("How many deletion requests are open?"), &[])
                .await
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_fallback, bench_offline_respond);
criterion_main!(benches);
