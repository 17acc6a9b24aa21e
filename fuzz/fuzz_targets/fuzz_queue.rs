#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streamcore::{BoundedQueue, ByteStream, Direction, StreamOptions};

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    AppendRepeated(u8, u8),
    AppendQueue(Vec<u8>),
    Receive(Vec<u8>),
    RemoveFront(u8),
    PopFront(u8),
    PopAll,
    RemoveAll,
    SetCapacity(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

/// Naive model: push everything, then drop from the front until it fits.
struct Model {
    data: VecDeque<u8>,
    capacity: usize,
}

impl Model {
    fn append(&mut self, bytes: impl IntoIterator<Item = u8>) {
        self.data.extend(bytes);
        while self.data.len() > self.capacity {
            self.data.pop_front();
        }
    }

    fn pop_front(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.data.len());
        self.data.drain(..n).collect()
    }
}

fn run(input: Input) {
    let capacity = usize::from(input.capacity);
    let mut queue = BoundedQueue::new(capacity);
    let mut stream = ByteStream::new(StreamOptions {
        rx_capacity: capacity,
        ..Default::default()
    });
    let mut model = Model {
        data: VecDeque::new(),
        capacity,
    };

    for op in input.ops {
        match op {
            Op::Append(bytes) => {
                queue.append(&bytes);
                model.append(bytes);
            }
            Op::AppendRepeated(byte, count) => {
                queue.append_repeated(byte, usize::from(count));
                model.append(std::iter::repeat_n(byte, usize::from(count)));
            }
            Op::AppendQueue(bytes) => {
                let other = BoundedQueue::with_storage(bytes.clone(), bytes.len());
                queue.append_queue(&other);
                model.append(bytes);
            }
            Op::Receive(bytes) => {
                let before = queue.clone();
                let mut expected = before.clone();
                expected.append(&bytes);
                stream.attach(Direction::Rx, before);
                stream.receive(&bytes).unwrap();
                assert_eq!(stream.queue(Direction::Rx).unwrap(), &expected);
            }
            Op::RemoveFront(n) => {
                queue.remove_front(usize::from(n));
                model.pop_front(usize::from(n));
            }
            Op::PopFront(n) => {
                let popped = queue.pop_front(usize::from(n));
                assert_eq!(popped.as_slice(), model.pop_front(usize::from(n)).as_slice());
            }
            Op::PopAll => {
                let popped = queue.pop_all();
                assert_eq!(popped.as_slice(), model.pop_front(usize::MAX).as_slice());
                assert!(queue.pop_all().is_empty());
            }
            Op::RemoveAll => {
                queue.remove_all();
                model.data.clear();
            }
            Op::SetCapacity(c) => {
                queue.set_capacity(usize::from(c));
                model.capacity = usize::from(c);
                model.append(std::iter::empty());
            }
        }

        assert!(queue.len() <= queue.capacity());
        assert!(queue.iter().eq(model.data.iter().copied()));
    }
}

fuzz_target!(|input: Input| run(input));
