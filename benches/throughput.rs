use criterion::{criterion_group, criterion_main, Criterion};
use roadmap::{Router, RoutingTable};
use serde_json::json;
use std::hint::black_box;

fn example_table() -> &'static str {
    r#"
default_reply: "Sorry, regex not found"
routes:
  - name: com_address
    pattern: '^\w+@\w+\.com$'
    reply: "COM ADDRESS: {0}"
  - name: org_address
    pattern: '^(\w+)@\w+\.org$'
    pass_primary: false
    reply: "ORG ADDRESS: {0}"
  - name: net_address
    pattern: '^(?P<user>\w+)@(?P<host>\w+)\.net$'
    pass_primary: false
    reply: "NET ADDRESS: {user} at {host}"
  - name: yes
    pattern: '^[yY]'
    pass_primary: false
    reply: "YES"
  - name: no
    pattern: '^[nN]'
    reply: "NO: {0}"
  - name: ends_with_w
    pattern: 'end(.*?)[wW]+(?P<after_w>.*)'
    reply: "{0} {1} {2} / {after_w}"
  - name: command
    pattern: '^/(\w+)(?: (.*))?$'
    pass_primary: false
    reply: "command {0} args {1}"
"#
}

fn build_router() -> Router {
    RoutingTable::from_yaml_str(example_table())
        .expect("failed to parse table")
        .into_router()
        .expect("failed to build router")
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = build_router();
    c.bench_function("route_match", |b| {
        let inputs = [
            "bob@example.com",
            "alice@example.org",
            "carol@example.net",
            "No way",
            "/join #rust",
            "nothing matches this input at all",
        ];
        b.iter(|| {
            for input in inputs.iter() {
                let res = router.route(*input, None);
                black_box(&res);
            }
        })
    });

    c.bench_function("route_by_key_expanding_primary", |b| {
        b.iter(|| {
            let res = router.route(json!(["woot", "scoot"]), Some("endbeforewwwwafter"));
            black_box(&res);
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let router = build_router();
    let input = json!("/join #rust");
    c.bench_function("lookup_handler", |b| {
        b.iter(|| black_box(router.lookup_handler(&input, None)))
    });
}

criterion_group!(benches, bench_route_throughput, bench_lookup);
criterion_main!(benches);
