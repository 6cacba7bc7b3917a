mod common;

use common::{random_directed, RANDOM_SEED};
use fastrand::Rng;
use keygraph::algo::{scc::Algo, StronglyConnectedComponents};

fn main() {
    divan::main();
}

fn bench_random(bencher: divan::Bencher, vertex_count: usize, density: f32, algo: Algo) {
    let graph = random_directed(vertex_count, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| StronglyConnectedComponents::on(&graph).using(algo).run());
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn tarjan_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    bench_random(bencher, N, density, Algo::Tarjan);
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn kosaraju_sharir_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    bench_random(bencher, N, density, Algo::KosarajuSharir);
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.1, 0.5])]
fn gabow_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    bench_random(bencher, N, density, Algo::Gabow);
}
