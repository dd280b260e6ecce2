use dlist::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_links<T: PartialEq + std::fmt::Debug>(list: &DoublyLinkedList<T>) {
    let from_front: Vec<_> = list.iter().collect();
    let from_back: Vec<_> = list.iter().rev().collect();
    let re_reved: Vec<_> = from_back.into_iter().rev().collect();

    assert_eq!(from_front.len(), list.len());
    assert_eq!(from_front, re_reved);
    assert_eq!(list.is_empty(), list.first().is_none());
    assert_eq!(list.is_empty(), list.last().is_none());
}

#[test]
fn add_then_read_back() {
    let values = [7, 3, 9, 1, 4];
    let mut list = DoublyLinkedList::new();

    for (count, value) in values.iter().enumerate() {
        list.push_back(*value);
        assert_eq!(list.len(), count + 1);
    }

    for (i, value) in values.iter().enumerate() {
        assert_eq!(list.get(i), Ok(value));
        assert_eq!(list.index_of(value), Some(i));
    }
    assert_eq!(list.index_of(&100), None);
}

#[test]
fn remove_at_middle() {
    let mut list = dlist![1 => 2 => 3];
    list.remove_at(1).unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0], 1);
    assert_eq!(list[1], 3);
    assert_eq!(list.index_of(&2), None);
    check_links(&list);
}

#[test]
fn iterate_reset_iterate() {
    let list = dlist!["a" => "b" => "c"];
    let mut iter = list.iter();

    assert_eq!(iter.next(), Some(&"a"));
    assert_eq!(iter.next(), Some(&"b"));
    assert_eq!(iter.next(), Some(&"c"));
    assert_eq!(iter.next(), None);

    iter.reset();
    assert!(iter.eq(["a", "b", "c"].iter()));
    assert_eq!(list.len(), 3);
}

#[test]
fn copy_to_leaves_tail_untouched() {
    let list: DoublyLinkedList<u8> = (1..=4).collect();
    let mut buf = [0xff; 8];

    list.copy_to(&mut buf, 0).unwrap();
    assert_eq!(buf, [1, 2, 3, 4, 0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn errors_leave_list_unchanged() {
    let mut list = dlist![1 => 2];

    assert_eq!(
        list.insert(5, 0),
        Err(ListError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(
        list.remove_at(2),
        Err(ListError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        list.copy_to(&mut [0; 1], 0),
        Err(ListError::Capacity {
            required: 2,
            available: 1,
        })
    );

    assert_eq!(list, dlist![1 => 2]);
    check_links(&list);
}

/// Drives a list and a `Vec` with the same random operations and checks they
/// never disagree.
#[test]
fn matches_vec_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = DoublyLinkedList::new();
    let mut model: Vec<u8> = Vec::new();

    for _ in 0..5_000 {
        let value: u8 = rng.gen_range(0..16);

        match rng.gen_range(0..8) {
            0 => {
                list.push_back(value);
                model.push(value);
            }
            1 => {
                list.push_front(value);
                model.insert(0, value);
            }
            2 => {
                let index = rng.gen_range(0..=model.len() + 1);
                let result = list.insert(index, value);
                if index <= model.len() {
                    assert_eq!(result, Ok(()));
                    model.insert(index, value);
                } else {
                    assert!(result.is_err());
                }
            }
            3 => {
                let index = rng.gen_range(0..=model.len());
                let result = list.remove_at(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            4 => {
                let removed = list.remove(&value);
                match model.iter().position(|elem| *elem == value) {
                    Some(index) => {
                        assert!(removed);
                        model.remove(index);
                    }
                    None => assert!(!removed),
                }
            }
            5 => {
                assert_eq!(
                    list.index_of(&value),
                    model.iter().position(|elem| *elem == value)
                );
                assert_eq!(list.contains(&value), model.contains(&value));
            }
            6 if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                assert_eq!(list.set(index, value), Ok(model[index]));
                model[index] = value;
            }
            _ => {
                assert_eq!(list.pop_back(), model.pop());
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.first());
        assert_eq!(list.back(), model.last());
    }

    check_links(&list);
    assert!(list.iter().eq(model.iter()));

    let mut buf = vec![0; model.len()];
    list.copy_to(&mut buf, 0).unwrap();
    assert_eq!(buf, model);
}
