use binheap::{max_n, min_n, min_n_cloned, top_n, top_n_cloned};
use rand::Rng;

#[test]
fn min_n_front_loads_result() {
    let source = [5, 1, 5, 2, 7, -111];
    let mut input = source;
    assert_eq!(min_n(&mut input, 3), [-111, 1, 2]);
    assert_eq!(input[..3], [-111, 1, 2]);
    let mut rest = input[3..].to_vec();
    rest.sort();
    assert_eq!(rest, [5, 5, 7]);

    assert_eq!(min_n_cloned(&source, 3), [-111, 1, 2]);
    assert_eq!(source, [5, 1, 5, 2, 7, -111]);
}

#[test]
fn zero_k_touches_nothing() {
    let mut input = vec!["b", "c", "a"];
    assert!(top_n(&mut input, 0, |a, b| a < b).is_empty());
    assert!(max_n(&mut input, 0).is_empty());
    assert_eq!(input, ["b", "c", "a"]);
}

#[test]
fn k_past_len_sorts_everything() {
    let mut input = vec![3, 9, 1, 4, 1, 5];
    assert_eq!(max_n(&mut input, 6), [9, 5, 4, 3, 1, 1]);
    assert_eq!(max_n(&mut input, 100), [9, 5, 4, 3, 1, 1]);
    assert_eq!(input, [9, 5, 4, 3, 1, 1]);
}

#[test]
fn matches_sort_by_priority() {
    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        score: u16,
        id: usize,
    }

    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let n = rng.gen_range(0..500);
        let k = rng.gen_range(0..=n);
        let data = (0..n)
            .map(|id| Entry {
                score: rng.gen_range(0..1000),
                id,
            })
            .collect::<Vec<_>>();
        // break ties on id so the expected order is unique
        let better = |a: &Entry, b: &Entry| (a.score, b.id) > (b.score, a.id);

        let mut expected = data.clone();
        expected.sort_by(|a, b| (b.score, a.id).cmp(&(a.score, b.id)));
        expected.truncate(k);

        let cloned = top_n_cloned(&data, k, better);
        assert_eq!(cloned, expected);

        let mut input = data.clone();
        assert_eq!(top_n(&mut input, k, better), &expected[..]);
        let mut ids = input.iter().map(|e| e.id).collect::<Vec<_>>();
        ids.sort();
        assert_eq!(ids, (0..n).collect::<Vec<_>>());
    }
}
