#![cfg(test)]

use super::*;

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    queue.enqueue('a');
    queue.enqueue('b');
    queue.enqueue('c');

    assert_eq!(queue.dequeue(), Some('a'));
    assert_eq!(queue.dequeue(), Some('b'));
    assert_eq!(queue.dequeue(), Some('c'));
    assert_eq!(queue.dequeue(), None, "An empty Queue should signal absence when dequeued.");
}

#[test]
fn test_wrapping_order() {
    // Alternate enqueues and dequeues so the ring buffer's head moves past its start.
    let mut queue = Queue::new();
    let mut expected = 0;
    for i in 0..100 {
        queue.enqueue(i);
        if i % 3 == 0 {
            assert_eq!(queue.dequeue(), Some(expected));
            expected += 1;
        }
    }

    assert_eq!(
        queue.into_iter().collect::<Vec<_>>(),
        (expected..100).collect::<Vec<_>>(),
        "Items should leave in the order they were enqueued."
    );
}

#[test]
fn test_peek() {
    let mut queue: Queue<_> = ["front", "back"].into_iter().collect();
    assert_eq!(queue.peek(), Some(&"front"));
    assert_eq!(queue.len(), 2, "Peeking shouldn't remove the front item.");

    queue.dequeue();
    assert_eq!(queue.peek(), Some(&"back"));
    queue.dequeue();

    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
    assert_eq!(queue, Queue::default());
}
