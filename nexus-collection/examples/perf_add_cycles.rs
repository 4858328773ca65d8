//! Cycle-accurate add latency comparison using rdtscp.
//!
//! Compares nexus-collection vs Vec with per-operation cycle counts,
//! including the reallocation tail.
//!
//! Run with:
//!   cargo build --release --example perf_add_cycles
//!   taskset -c 0 ./target/release/examples/perf_add_cycles

use hdrhistogram::Histogram;
use nexus_collection::Collection;
use std::hint::black_box;

const COUNT: usize = 100_000;

#[inline(always)]
fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        let mut aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut aux)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        panic!("rdtscp only supported on x86_64");
    }
}

fn print_stats(name: &str, hist: &Histogram<u64>) {
    println!("{}", name);
    println!("  min:  {:>6} cycles", hist.min());
    println!("  p50:  {:>6} cycles", hist.value_at_quantile(0.50));
    println!("  p99:  {:>6} cycles", hist.value_at_quantile(0.99));
    println!("  p999: {:>6} cycles", hist.value_at_quantile(0.999));
    println!("  max:  {:>6} cycles", hist.max());
    println!("  avg:  {:>6.0} cycles", hist.mean());
}

fn bench_collection() -> Histogram<u64> {
    let mut hist = Histogram::<u64>::new(3).unwrap();

    // Warmup
    let mut warm = Collection::new();
    for i in 0..(COUNT / 10) as u64 {
        warm.add(black_box(i));
    }
    drop(warm);

    // Measured adds, starting from the default capacity
    let mut coll = Collection::new();
    for i in 0..COUNT as u64 {
        let start = rdtscp();
        coll.add(black_box(i));
        let end = rdtscp();
        let _ = hist.record(end.wrapping_sub(start));
    }
    black_box(coll.len());

    hist
}

fn bench_vec() -> Histogram<u64> {
    let mut hist = Histogram::<u64>::new(3).unwrap();

    // Warmup
    let mut warm = Vec::with_capacity(4);
    for i in 0..(COUNT / 10) as u64 {
        warm.push(black_box(i));
    }
    drop(warm);

    // Measured pushes
    let mut vec = Vec::with_capacity(4);
    for i in 0..COUNT as u64 {
        let start = rdtscp();
        vec.push(black_box(i));
        let end = rdtscp();
        let _ = hist.record(end.wrapping_sub(start));
    }
    black_box(vec.len());

    hist
}

fn main() {
    println!("ADD latency comparison ({} ops)", COUNT);
    println!("========================================");
    println!();

    let coll_hist = bench_collection();
    let vec_hist = bench_vec();

    print_stats("nexus-collection:", &coll_hist);
    println!();
    print_stats("vec:", &vec_hist);
    println!();

    let coll_p50 = coll_hist.value_at_quantile(0.50);
    let vec_p50 = vec_hist.value_at_quantile(0.50);

    println!("----------------------------------------");
    if coll_p50 < vec_p50 {
        println!(
            "nexus-collection p50 is {:.1}% FASTER",
            (1.0 - coll_p50 as f64 / vec_p50 as f64) * 100.0
        );
    } else if coll_p50 > vec_p50 {
        println!(
            "nexus-collection p50 is {:.1}% SLOWER",
            (coll_p50 as f64 / vec_p50 as f64 - 1.0) * 100.0
        );
    } else {
        println!("nexus-collection p50 is EQUAL");
    }
}
