use argh::FromArgs;
use generics::prelude::*;
use log::debug;

/// Pops records ordered by the length of their payload.
#[derive(FromArgs, Debug)]
struct Arguments {
    /// print debug logs
    #[argh(switch, short = 'v')]
    verbose: bool,
}

// no equality or ordering on purpose: the heap only needs the predicate
#[derive(Debug)]
struct Record {
    data: Vec<i32>,
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

    let mut heap = Heap::with_priority(|x: &Record, y: &Record| x.data.len() > y.data.len());
    for data in [
        vec![1, 2, 3, 4, 5, 6],
        vec![],
        vec![1, 2, 3],
        vec![11],
        vec![11, 2222, 3333, 44],
        vec![1],
        vec![],
        vec![1111],
        vec![1, 2],
    ] {
        heap.push(Record { data });
        debug!("pushed, root is now {:?}", heap.peek());
    }

    println!(
        "Heap has len: {}\nElements sorted by payload length:\n",
        heap.len()
    );
    while let Some(record) = heap.try_pop() {
        println!(" {record:?}");
    }
}
