mod error;
mod heap;

pub use error::HeapError;
pub use heap::{MaxHeap, MinHeap, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR};

use ordered_float::OrderedFloat;
use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[allow(dead_code)]
fn demo_max_heap_dstruct() {
    let mut heap = MaxHeap::new();
    for &v in [4, 10, 2, 22, 45, 18, -8, 95, 13, 42].iter() {
        heap.insert(v);
    }

    println!("[Demo MaxHeap]");
    println!("heap order:  {}", heap);
    for _ in 0..2 {
        match heap.remove_max() {
            Ok(max) => println!("removed:     {}", max),
            Err(err) => println!("error:       {}", err),
        }
    }
    println!("heap order:  {}", heap);
    println!("capacity:    {}", heap.capacity());
    println!();
}

#[allow(dead_code)]
fn validate_max_heap_dstruct() {
    let mut rng = SmallRng::from_entropy();

    const K: usize = 64;
    const N: usize = K * 1024;

    let values: Vec<i32> = (0..N).map(|_| rng.gen_range(-1000_000..1000_000)).collect();
    let mut true_heap = std::collections::BinaryHeap::new();
    let mut heap = MaxHeap::with_capacity(1);

    println!("[Validate MaxHeap]");
    for k in 0..K {
        let start = k * N / K;
        let end = start + N / K;

        for &v in values[start..end].iter() {
            heap.insert(v);
            true_heap.push(v);
            assert!(heap.len() <= heap.capacity());
        }
        assert!(heap.is_valid());
        assert_eq!(heap.peek_max(), true_heap.peek());

        // Remove a random share of this round's insertions.
        for _ in 0..rng.gen_range(0..N / K) {
            assert_eq!(heap.remove_max().ok(), true_heap.pop());
        }
        assert!(heap.is_valid());
        assert_eq!(heap.len(), true_heap.len());
    }

    while let Some(expected) = true_heap.pop() {
        assert_eq!(heap.remove_max(), Ok(expected));
    }
    assert_eq!(heap.remove_max(), Err(HeapError::Empty));
    println!("MaxHeap VALIDATED");
    println!();
}

#[allow(dead_code)]
fn validate_float_max_heap_dstruct() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 16 * 1024;

    let mut values: Vec<OrderedFloat<f64>> = (0..N)
        .map(|_| OrderedFloat(rng.gen_range(-2.0..2.0)))
        .collect();

    println!("[Validate MaxHeap<OrderedFloat<f64>>]");
    let mut heap: MaxHeap<_> = values.iter().cloned().collect();
    assert!(heap.is_valid());

    values.sort();
    for &expected in values.iter().rev() {
        assert_eq!(heap.remove_max(), Ok(expected));
    }
    assert!(heap.is_empty());
    println!("MaxHeap<OrderedFloat<f64>> VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_max_heap_dstruct() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 256 * 1024;

    let values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

    let mut std_heap = std::collections::BinaryHeap::new();
    bench("std::collections::BinaryHeap::push", 2, || {
        for &v in values.iter() {
            std_heap.push(v);
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        while std_heap.pop().is_some() {}
    });
    println!();

    let mut heap = MaxHeap::new();
    bench("MaxHeap::insert", 5, || {
        for (len, &v) in values.iter().enumerate() {
            assert_eq!(heap.len(), len);
            heap.insert(v);
        }
    });
    bench("MaxHeap::remove_max", 4, || {
        for len in (0..N).rev() {
            assert!(heap.remove_max().is_ok());
            assert_eq!(heap.len(), len);
        }
    });
    bench("MaxHeap::from_iter", 4, || {
        drop(values.iter().cloned().collect::<MaxHeap<_>>());
    });
}

#[test]
pub fn main() {
    demo_max_heap_dstruct();
    validate_max_heap_dstruct();
    validate_float_max_heap_dstruct();
    bench_max_heap_dstruct();
    println!();
}
