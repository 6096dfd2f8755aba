use argh::FromArgs;
use generics::prelude::*;
use log::debug;

/// Runs the top-N selections over a few fixed inputs.
#[derive(FromArgs, Debug)]
struct Arguments {
    /// print debug logs
    #[argh(switch, short = 'v')]
    verbose: bool,
    /// how many elements to select
    #[argh(option, short = 'k', default = "3")]
    k: usize,
}

fn main() {
    let args: Arguments = argh::from_env();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Trace);
        debug!("arguments: {args:#?}");
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    let k = args.k;

    let mut data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    println!("--- top {k} min ---\n source: {data:?}");
    let mins = min_n(&mut data, k).to_vec();
    println!(" top {k} min elements: {mins:?}");
    println!(" source was mutated: {data:?}\n");

    let mut data = [
        1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0,
    ];
    println!("--- top {k} max ---\n source: {data:?}");
    let maxs = max_n(&mut data, k).to_vec();
    println!(" top {k} max elements: {maxs:?}");
    println!(" source was mutated: {data:?}\n");

    let words = ["foo", "bar", "foobar", "zzz", "aaa", "some more text"];
    println!("--- top {k} min without mutation ---\n source: {words:?}");
    let mins = min_n_cloned(&words, k);
    println!(" top {k} min elements: {mins:?}");
    println!(" source was not mutated: {words:?}\n");

    let mut floats = [1.5f64, 2.0, 3.25, 4.0, 10.0, 9.0, 0.5, -2.0];
    println!("--- top {k} floats by a comparator ---\n source: {floats:?}");
    let top = top_n(&mut floats, k, |x, y| x > y).to_vec();
    println!(" top {k} elements: {top:?}");
    println!(" source was mutated: {floats:?}\n");

    let mut data = [
        1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0,
    ];
    println!("--- top {k} by remainder of division by 3 ---\n source: {data:?}");
    let top = top_n(&mut data, k, |x, y| x % 3 > y % 3).to_vec();
    println!(" top {k} elements: {top:?}");
    println!(" source was mutated: {data:?}");
}
