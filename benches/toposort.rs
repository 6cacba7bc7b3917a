mod common;

use common::{random_acyclic, RANDOM_SEED};
use fastrand::Rng;
use keygraph::algo::TopologicalOrder;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_acyclic(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| TopologicalOrder::on(&graph).dfs().run());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn kahn_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = random_acyclic(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| TopologicalOrder::on(&graph).kahn().run());
}
