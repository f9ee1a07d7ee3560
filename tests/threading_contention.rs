use std::sync::{Arc, Barrier, Mutex};
use std::thread;

use prodline::BoundedBuffer;

const ITEMS_PER_PRODUCER: u64 = 200;

#[test]
fn test_multi_producer_multi_consumer_conservation() {
    let buffer: Arc<BoundedBuffer<(u64, u64)>> = Arc::new(BoundedBuffer::new(4));
    let start = Arc::new(Barrier::new(4));
    let consumed = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::new();

    for producer_id in 0..2u64 {
        let buffer = buffer.clone();
        let start = start.clone();
        handles.push(thread::spawn(move || {
            start.wait();
            for seq in 0..ITEMS_PER_PRODUCER {
                buffer.put((producer_id, seq)).unwrap();
            }
        }));
    }

    for _ in 0..2 {
        let buffer = buffer.clone();
        let start = start.clone();
        let consumed = consumed.clone();
        handles.push(thread::spawn(move || {
            start.wait();
            for _ in 0..ITEMS_PER_PRODUCER {
                let item = buffer.get().unwrap();
                assert!(buffer.len() <= buffer.capacity());
                consumed.lock().unwrap().push(item);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread should complete");
    }

    let mut consumed = consumed.lock().unwrap().clone();
    assert_eq!(consumed.len(), 2 * ITEMS_PER_PRODUCER as usize);
    assert!(buffer.is_empty());

    // every produced item arrived exactly once
    consumed.sort_unstable();
    let mut expected = Vec::new();
    for producer_id in 0..2u64 {
        for seq in 0..ITEMS_PER_PRODUCER {
            expected.push((producer_id, seq));
        }
    }
    assert_eq!(consumed, expected);
}

#[test]
fn test_per_producer_order_with_single_consumer() {
    let buffer: Arc<BoundedBuffer<(u64, u64)>> = Arc::new(BoundedBuffer::new(3));
    let start = Arc::new(Barrier::new(3));

    let mut producer_handles = Vec::new();
    for producer_id in 0..2u64 {
        let buffer = buffer.clone();
        let start = start.clone();
        producer_handles.push(thread::spawn(move || {
            start.wait();
            for seq in 0..ITEMS_PER_PRODUCER {
                buffer.put((producer_id, seq)).unwrap();
            }
        }));
    }

    let consumer_buffer = buffer.clone();
    let consumer_start = start.clone();
    let consumer = thread::spawn(move || {
        consumer_start.wait();
        let mut seen = Vec::new();
        for _ in 0..2 * ITEMS_PER_PRODUCER {
            seen.push(consumer_buffer.get().unwrap());
        }
        seen
    });

    for handle in producer_handles {
        handle.join().expect("producer should complete");
    }
    let seen = consumer.join().expect("consumer should complete");

    // items from one producer are never reordered relative to each other
    for producer_id in 0..2u64 {
        let seqs: Vec<u64> = seen
            .iter()
            .filter(|(id, _)| *id == producer_id)
            .map(|(_, seq)| *seq)
            .collect();
        assert_eq!(seqs.len(), ITEMS_PER_PRODUCER as usize);
        for pair in seqs.windows(2) {
            assert!(pair[0] < pair[1], "producer {} reordered", producer_id);
        }
    }
}

#[test]
fn test_contended_capacity_never_exceeded() {
    let buffer: Arc<BoundedBuffer<u64>> = Arc::new(BoundedBuffer::new(2));
    let start = Arc::new(Barrier::new(6));
    let mut handles = Vec::new();

    for _ in 0..3 {
        let buffer = buffer.clone();
        let start = start.clone();
        handles.push(thread::spawn(move || {
            start.wait();
            for seq in 0..100 {
                buffer.put(seq).unwrap();
            }
        }));
    }

    for _ in 0..3 {
        let buffer = buffer.clone();
        let start = start.clone();
        handles.push(thread::spawn(move || {
            start.wait();
            for _ in 0..100 {
                buffer.get().unwrap();
                assert!(buffer.len() <= buffer.capacity());
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread should complete");
    }
    assert!(buffer.is_empty());
}
