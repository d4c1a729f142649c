use proptest::prelude::*;
use ring_queue::{BorrowedRingQueue, OwnedRingQueue};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u32),
    Dequeue,
    Peek,
    Clear,
    ToArray(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::Enqueue),
        3 => Just(Op::Dequeue),
        1 => Just(Op::Peek),
        1 => Just(Op::Clear),
        1 => (0usize..20).prop_map(Op::ToArray),
    ]
}

fn capacity_strategy() -> impl Strategy<Value = usize> {
    (1u32..7).prop_map(|shift| 1usize << shift)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_matches_vecdeque_model(
        capacity in capacity_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..300),
    ) {
        let mut q = OwnedRingQueue::<u32>::create(capacity).unwrap();
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(v) => {
                    let accepted = q.enqueue(v);
                    prop_assert_eq!(accepted, model.len() < capacity - 1);
                    if accepted {
                        model.push_back(v);
                    }
                }
                Op::Dequeue => {
                    prop_assert_eq!(q.dequeue(), model.pop_front());
                }
                Op::Peek => {
                    let first = q.peek();
                    prop_assert_eq!(first, model.front().copied());
                    prop_assert_eq!(q.peek(), first);
                }
                Op::Clear => {
                    q.clear();
                    model.clear();
                }
                Op::ToArray(len) => {
                    let mut dest = vec![0u32; len];
                    let copied = q.to_array(&mut dest);
                    prop_assert_eq!(copied, model.len().min(len));
                    let expected: Vec<u32> = model.iter().copied().take(copied).collect();
                    prop_assert_eq!(&dest[..copied], expected.as_slice());
                }
            }

            prop_assert!(q.count() <= capacity - 1);
            prop_assert_eq!(q.count(), model.len());
            prop_assert_eq!(q.is_empty(), model.is_empty());
            prop_assert_eq!(q.is_full(), model.len() == capacity - 1);
            prop_assert!(q.head() < capacity && q.tail() < capacity);

            let active = (0..capacity).filter(|&i| q.is_active(i)).count();
            prop_assert_eq!(active, q.count());
        }
    }

    #[test]
    fn prop_linear_flag_matches_slices(
        shift in 0usize..8,
        fill in 0usize..8,
    ) {
        let mut buffer = [0u16; 8];
        let mut q = BorrowedRingQueue::init(&mut buffer);
        for v in 0..shift as u16 {
            q.enqueue(v);
            q.dequeue();
        }
        for v in 0..fill.min(7) as u16 {
            q.enqueue(v);
        }
        let (front, back) = q.as_slices();
        prop_assert_eq!(front.len() + back.len(), q.count());
        if q.is_linear() {
            prop_assert!(back.is_empty());
        } else {
            // Wrapped regions run to the physical end of the buffer
            prop_assert_eq!(q.head() + front.len(), q.capacity());
        }
        let joined: Vec<u16> = front.iter().chain(back).copied().collect();
        prop_assert_eq!(joined, q.iter().collect::<Vec<_>>());
    }
}
