use argh::FromArgs;
use generics::prelude::*;
use log::{debug, info};
use rand::Rng;

/// Several workers stream scores into per-group bounded heaps held in a
/// sharded map, then the result is checked against a plain selection.
#[derive(FromArgs, Debug)]
struct Arguments {
    /// print debug logs
    #[argh(switch, short = 'v')]
    verbose: bool,
    /// scores kept per group
    #[argh(option, short = 'k', default = "5")]
    k: usize,
    /// number of worker threads
    #[argh(option, default = "4")]
    workers: usize,
    /// number of groups
    #[argh(option, default = "16")]
    groups: u32,
}

fn main() {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
        debug!("arguments: {args:#?}");
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    let k = args.k;

    let options = SmapOptions::heuristic(args.groups as usize);
    let detector = Modulo::new(options.shards as usize);
    let tops = IntegerMap::<u32, MinHeap<u64>>::with_options(&options, detector)
        .expect("heuristic options are valid");
    let seen = IntegerMap::<u32, Vec<u64>>::integer(16, 0);

    std::thread::scope(|scope| {
        for worker in 0..args.workers {
            let (tops, seen) = (&tops, &seen);
            scope.spawn(move || {
                let mut rng = rand::thread_rng();
                for _ in 0..10_000 {
                    let group = rng.gen_range(0..args.groups);
                    let score = rng.gen_range(0..1_000_000u64);
                    tops.update(group, MinHeap::new, |heap| {
                        if heap.len() < k {
                            heap.push(score);
                        } else {
                            heap.push_pop(score);
                        }
                    });
                    seen.update(group, Vec::new, |scores| scores.push(score));
                }
                debug!("worker {worker} finished");
            });
        }
    });

    let mut groups = Vec::new();
    tops.range(|&group, heap| {
        groups.push((group, heap.clone().into_sorted_vec()));
        true
    });
    groups.sort();
    for (group, mut top) in groups {
        // the heap pops its weakest score first
        top.reverse();
        let scores = seen.load(&group).unwrap_or_default();
        assert_eq!(top, max_n_cloned(&scores, k));
        info!("group {group}: {} scores, top {k}: {top:?}", scores.len());
    }
}
