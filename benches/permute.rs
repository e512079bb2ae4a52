use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordjumble::wordlist::trie::searchconfig::SearchConfig;
use wordjumble::wordlist::wordlist::Wordlist;
use wordjumble::wordlist::TrieKind;

fn random_word(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let vocabulary: Vec<Vec<u8>> = (0..50_000)
        .map(|_| {
            let len = rng.gen_range(2..=9);
            random_word(&mut rng, len)
        })
        .collect();
    let racks: Vec<Vec<u8>> = (0..64).map(|_| random_word(&mut rng, 8)).collect();

    let consume = SearchConfig::builder().consume(true).build();
    let reuse = SearchConfig::new();

    let mut group = c.benchmark_group("permute");
    group.sample_size(10);
    for kind in [TrieKind::Map, TrieKind::Array] {
        let mut wl = Wordlist::new(kind);
        vocabulary.iter().for_each(|word| { wl.load(word); });

        group.bench_with_input(BenchmarkId::new("consume", format!("{:?}", kind)), &wl,
                               |b, wl| b.iter(|| racks.iter().map(|x| wl.permute(x, &consume).len()).sum::<usize>()));
        group.bench_with_input(BenchmarkId::new("reuse", format!("{:?}", kind)), &wl,
                               |b, wl| b.iter(|| racks.iter().map(|x| wl.permute(x, &reuse).len()).sum::<usize>()));
        group.bench_with_input(BenchmarkId::new("consume (multithreaded)", format!("{:?}", kind)), &wl,
                               |b, wl| b.iter(|| wl.permute_many(&racks, &consume)));
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
