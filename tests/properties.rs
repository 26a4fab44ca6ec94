use std::collections::VecDeque;

use circular::{CircularList, ListError, QueueError, QueueStatus, RingQueue};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Debug)]
enum QueueOp {
    Enqueue(u16),
    Dequeue,
    Peek,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        3 => any::<u16>().prop_map(QueueOp::Enqueue),
        2 => Just(QueueOp::Dequeue),
        1 => Just(QueueOp::Peek),
    ]
}

#[derive(Clone, Debug)]
enum ListOp {
    InsertEnd(i16),
    InsertBeginning(i16),
    InsertAt(i16, usize),
    DeleteBeginning,
    DeleteEnd,
    DeleteAt(usize),
    DeleteValue(i16),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<i16>().prop_map(ListOp::InsertEnd),
        any::<i16>().prop_map(ListOp::InsertBeginning),
        (-8..8i16, 0..20usize).prop_map(|(v, p)| ListOp::InsertAt(v, p)),
        Just(ListOp::DeleteBeginning),
        Just(ListOp::DeleteEnd),
        (0..20usize).prop_map(ListOp::DeleteAt),
        (-8..8i16).prop_map(ListOp::DeleteValue),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn queue_matches_bounded_fifo(ops in proptest::collection::vec(queue_op(), 0..200)) {
        const CAP: usize = 7;
        let mut queue: RingQueue<[u16; CAP]> = RingQueue::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Enqueue(v) => {
                    if model.len() == CAP {
                        prop_assert_eq!(queue.enqueue(v), Err(QueueError::Overflow { element: v }));
                    } else {
                        prop_assert_eq!(queue.enqueue(v), Ok(()));
                        model.push_back(v);
                    }
                }
                QueueOp::Dequeue => match model.pop_front() {
                    Some(v) => { prop_assert_eq!(queue.dequeue(), Ok(v)); }
                    None => { prop_assert_eq!(queue.dequeue(), Err(QueueError::Underflow)); }
                },
                QueueOp::Peek => match model.front() {
                    Some(v) => { prop_assert_eq!(queue.peek(), Ok(v)); }
                    None => { prop_assert!(queue.peek().is_err()); }
                },
            }

            prop_assert!(queue.len() <= CAP);
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == CAP);
            prop_assert_eq!(queue.front_index().is_none(), model.is_empty());
            prop_assert_eq!(queue.rear_index().is_none(), model.is_empty());
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }

    #[test]
    fn list_matches_vec(ops in proptest::collection::vec(list_op(), 0..100)) {
        let mut list = CircularList::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            match op {
                ListOp::InsertEnd(v) => {
                    list.insert_at_end(v);
                    model.push(v);
                }
                ListOp::InsertBeginning(v) => {
                    list.insert_at_beginning(v);
                    model.insert(0, v);
                }
                ListOp::InsertAt(v, p) => {
                    if p >= 1 && p <= model.len() + 1 {
                        prop_assert_eq!(list.insert_at_position(v, p), Ok(()));
                        model.insert(p - 1, v);
                    } else {
                        prop_assert_eq!(
                            list.insert_at_position(v, p),
                            Err(ListError::InvalidPosition { position: p, len: model.len() })
                        );
                    }
                }
                ListOp::DeleteBeginning => {
                    if model.is_empty() {
                        prop_assert_eq!(list.delete_from_beginning(), Err(ListError::Empty));
                    } else {
                        prop_assert_eq!(list.delete_from_beginning(), Ok(model.remove(0)));
                    }
                }
                ListOp::DeleteEnd => match model.pop() {
                    Some(v) => { prop_assert_eq!(list.delete_from_end(), Ok(v)); }
                    None => { prop_assert_eq!(list.delete_from_end(), Err(ListError::Empty)); }
                },
                ListOp::DeleteAt(p) => {
                    if model.is_empty() {
                        prop_assert_eq!(list.delete_at_position(p), Err(ListError::Empty));
                    } else if p >= 1 && p <= model.len() {
                        prop_assert_eq!(list.delete_at_position(p), Ok(model.remove(p - 1)));
                    } else {
                        prop_assert_eq!(
                            list.delete_at_position(p),
                            Err(ListError::InvalidPosition { position: p, len: model.len() })
                        );
                    }
                }
                ListOp::DeleteValue(v) => {
                    if model.is_empty() {
                        prop_assert_eq!(list.delete_by_value(&v), Err(ListError::Empty));
                    } else {
                        match model.iter().position(|x| *x == v) {
                            Some(i) => { prop_assert_eq!(list.delete_by_value(&v), Ok(model.remove(i))); }
                            None => { prop_assert_eq!(list.delete_by_value(&v), Err(ListError::NotFound)); }
                        }
                    }
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert!(list.traverse_forward().eq(model.iter()));
            prop_assert!(list.traverse_reverse().eq(model.iter().rev()));
            prop_assert_eq!(list.first(), model.first());
            prop_assert_eq!(list.last(), model.last());
            for v in -8..8i16 {
                prop_assert_eq!(list.contains(&v), model.contains(&v));
            }
        }
    }

    #[test]
    fn positional_insert_lands_at_index(
        values in proptest::collection::vec(any::<i32>(), 0..30),
        value in any::<i32>(),
        seed in any::<usize>(),
    ) {
        let mut list: CircularList<_> = values.iter().cloned().collect();
        let position = seed % (values.len() + 1) + 1;
        list.insert_at_position(value, position).unwrap();
        prop_assert_eq!(list.iter().nth(position - 1), Some(&value));
        prop_assert_eq!(list.len(), values.len() + 1);

        let removed = list.delete_at_position(position).unwrap();
        prop_assert_eq!(removed, value);
        prop_assert!(list.iter().eq(values.iter()));
    }
}

#[test]
fn queue_wraparound_half_capacity() {
    init_tracing();

    const CAP: usize = 10;
    let mut queue: RingQueue<[usize; CAP]> = RingQueue::new();
    for i in 0..CAP {
        queue.enqueue(i).unwrap();
    }
    for i in 0..CAP / 2 {
        assert_eq!(queue.dequeue(), Ok(i));
    }
    for i in CAP..CAP + CAP / 2 {
        queue.enqueue(i).unwrap();
    }
    assert!(queue.is_full());
    for _ in 0..CAP / 2 {
        queue.dequeue().unwrap();
    }
    let rest: Vec<usize> = queue.iter().cloned().collect();
    assert_eq!(rest, (CAP..CAP + CAP / 2).collect::<Vec<_>>());
}

#[test]
fn queue_scenario() {
    init_tracing();

    let mut queue: RingQueue<[i32; 3]> = RingQueue::new();
    queue.enqueue(10).unwrap();
    queue.enqueue(20).unwrap();
    queue.enqueue(30).unwrap();
    assert!(queue.is_full());

    let before = queue.clone();
    assert_eq!(queue.enqueue(40), Err(QueueError::Overflow { element: 40 }));
    assert_eq!(queue, before);

    assert_eq!(queue.dequeue(), Ok(10));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.status(), QueueStatus::Partial);
    assert_eq!(queue.enqueue(40), Ok(()));
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&20, &30, &40]);
}

#[test]
fn list_scenario() {
    init_tracing();

    let mut list = CircularList::new();
    list.insert_at_end(10);
    list.insert_at_end(20);
    list.insert_at_end(30);
    assert_eq!(list.traverse_forward().collect::<Vec<_>>(), vec![&10, &20, &30]);

    assert_eq!(list.delete_from_beginning(), Ok(10));
    assert_eq!(list.traverse_forward().collect::<Vec<_>>(), vec![&20, &30]);

    assert_eq!(list.delete_from_end(), Ok(30));
    assert_eq!(list.traverse_forward().collect::<Vec<_>>(), vec![&20]);

    assert_eq!(list.delete_from_beginning(), Ok(20));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.first(), None);
    assert_eq!(list.delete_from_beginning(), Err(ListError::Empty));
}
