use std::collections::VecDeque;

use proptest::prelude::*;
use ringq::RingQueue;

#[derive(Clone, Debug)]
enum Op {
    Add(u16),
    Remove,
    Pop,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<u16>().prop_map(Op::Add),
        3 => Just(Op::Remove),
        2 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

fn assert_matches(q: &RingQueue<u16>, model: &VecDeque<u16>) {
    assert_eq!(q.len(), model.len());
    assert_eq!(q.is_empty(), model.is_empty());
    assert_eq!(q.front(), model.front());
    for (i, elem) in model.iter().enumerate() {
        assert_eq!(q.get(i), elem);
    }
    assert!(q.try_get(model.len()).is_err());

    let capacity = q.capacity();
    assert!(capacity >= RingQueue::<u16>::MIN_CAPACITY);
    assert!(capacity.is_power_of_two());
    assert!(q.len() <= capacity);
    if capacity > RingQueue::<u16>::MIN_CAPACITY {
        assert!(q.len() * 4 > capacity, "len {} in {} slots", q.len(), capacity);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_behaves_like_vec_deque(ops in prop::collection::vec(op(), 0..600)) {
        let mut q = RingQueue::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Op::Add(x) => {
                    q.add(x);
                    model.push_back(x);
                }
                // callers must check the length before an unchecked remove
                Op::Remove => if q.len() > 0 {
                    prop_assert_eq!(q.peek(), model.front().unwrap());
                    q.remove();
                    model.pop_front();
                },
                Op::Pop => prop_assert_eq!(q.pop(), model.pop_front()),
                Op::Clear => {
                    q.clear();
                    model.clear();
                }
            }
            assert_matches(&q, &model);
        }
    }

    #[test]
    fn prop_fill_then_drain_preserves_order(xs in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut q = xs.iter().copied().collect::<RingQueue<_>>();
        prop_assert_eq!(q.len(), xs.len());
        let mut out = Vec::with_capacity(xs.len());
        while !q.is_empty() {
            out.push(*q.peek());
            q.remove();
        }
        prop_assert_eq!(out, xs);
        prop_assert_eq!(q.capacity(), RingQueue::<i64>::MIN_CAPACITY);
    }

    #[test]
    fn prop_get_out_of_range_reports(n in 0usize..100, extra in 0usize..1000) {
        let q = (0..n).collect::<RingQueue<_>>();
        let e = q.try_get(n + extra).unwrap_err();
        prop_assert_eq!(e.index, n + extra);
        prop_assert_eq!(e.len, n);
    }
}
