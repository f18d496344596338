//! Multi-thread stress tests for the shared adapters.
//!
//! Writers and readers run interleaved on the same handle; the assertions
//! check that readers only ever observe consistent states (counts within the
//! possible range, no lost updates, order invariants intact).

use std::thread;

use concurrent_collections_core_rs::MapOps;
use concurrent_collections_std_rs::{make_arc_array, make_arc_deque, make_arc_hash_map, make_arc_ordered_map};

const WRITER_THREADS: usize = 8;
const OPS_PER_THREAD: usize = 200;

#[test]
fn array_pushes_from_many_threads_are_all_retained() {
  let array = make_arc_array::<usize>();

  let mut workers = Vec::new();
  for thread_id in 0..WRITER_THREADS {
    let handle = array.clone();
    workers.push(thread::spawn(move || {
      for i in 0..OPS_PER_THREAD {
        handle.push(thread_id * OPS_PER_THREAD + i);
      }
    }));
  }
  for worker in workers {
    worker.join().unwrap();
  }

  let total = WRITER_THREADS * OPS_PER_THREAD;
  assert_eq!(array.len(), total);

  // Every value appears exactly once.
  let mut values = array.values();
  values.sort_unstable();
  assert_eq!(values, (0..total).collect::<Vec<_>>());
}

#[test]
fn deque_readers_never_observe_torn_state() {
  let deque = make_arc_deque::<usize>();

  let mut workers = Vec::new();
  for thread_id in 0..WRITER_THREADS {
    let handle = deque.clone();
    workers.push(thread::spawn(move || {
      for i in 0..OPS_PER_THREAD {
        if thread_id % 2 == 0 {
          handle.append(i);
        } else {
          handle.prepend(i);
        }
      }
    }));
  }

  let total = WRITER_THREADS * OPS_PER_THREAD;
  let reader = {
    let handle = deque.clone();
    thread::spawn(move || {
      for _ in 0..OPS_PER_THREAD {
        // A snapshot taken mid-write must be internally consistent: its
        // length can never exceed the total number of writes issued.
        let snapshot = handle.values();
        assert!(snapshot.len() <= total);
      }
    })
  };

  for worker in workers {
    worker.join().unwrap();
  }
  reader.join().unwrap();

  assert_eq!(deque.len(), total);
}

#[test]
fn map_inserts_and_membership_reads_interleave_safely() {
  let map = make_arc_hash_map::<(usize, usize), usize>();

  let mut workers = Vec::new();
  for thread_id in 0..WRITER_THREADS {
    let handle = map.clone();
    workers.push(thread::spawn(move || {
      for i in 0..OPS_PER_THREAD {
        handle.insert((thread_id, i), i);
        // A key inserted by this thread must be visible to it afterwards.
        assert!(handle.contains_key(&(thread_id, i)));
      }
    }));
  }

  let reader = {
    let handle = map.clone();
    thread::spawn(move || {
      for _ in 0..OPS_PER_THREAD {
        let count = handle.len();
        assert!(count <= WRITER_THREADS * OPS_PER_THREAD);
        let keys = handle.keys();
        assert!(keys.len() <= WRITER_THREADS * OPS_PER_THREAD);
      }
    })
  };

  for worker in workers {
    worker.join().unwrap();
  }
  reader.join().unwrap();

  assert_eq!(map.len(), WRITER_THREADS * OPS_PER_THREAD);
}

#[test]
fn map_mutate_under_contention_loses_no_increments() {
  let map = make_arc_hash_map::<&'static str, usize>();
  map.insert("counter", 0);

  let mut workers = Vec::new();
  for _ in 0..WRITER_THREADS {
    let handle = map.clone();
    workers.push(thread::spawn(move || {
      for _ in 0..OPS_PER_THREAD {
        // Atomic read-modify-write: a get/insert pair would drop updates.
        assert!(handle.mutate(&"counter", |value| *value += 1));
      }
    }));
  }
  for worker in workers {
    worker.join().unwrap();
  }

  assert_eq!(map.get(&"counter"), Some(WRITER_THREADS * OPS_PER_THREAD));
}

#[test]
fn ordered_map_moves_keep_the_key_set_a_permutation() {
  let map = make_arc_ordered_map::<usize, usize>();
  let size = 16;
  for key in 0..size {
    map.insert(key, key);
  }

  let mut workers = Vec::new();
  for thread_id in 0..4 {
    let handle = map.clone();
    workers.push(thread::spawn(move || {
      for i in 0..OPS_PER_THREAD {
        let from = (thread_id + i) % size;
        let to = (thread_id * 3 + i) % size;
        handle.move_index(from, to);
      }
    }));
  }

  let reader = {
    let handle = map.clone();
    thread::spawn(move || {
      for _ in 0..OPS_PER_THREAD {
        // Moves permute the order but never add, drop, or duplicate keys.
        let mut keys = handle.keys();
        assert_eq!(keys.len(), size);
        keys.sort_unstable();
        assert_eq!(keys, (0..size).collect::<Vec<_>>());
      }
    })
  };

  for worker in workers {
    worker.join().unwrap();
  }
  reader.join().unwrap();

  let mut keys = map.keys();
  keys.sort_unstable();
  assert_eq!(keys, (0..size).collect::<Vec<_>>());
}

#[test]
fn panicking_writer_thread_leaves_the_adapter_usable() {
  let array = make_arc_array::<u32>();

  let handle = array.clone();
  let crashed = thread::spawn(move || {
    handle.with_write(|items| {
      items.push(1);
      panic!("injected failure");
    });
  });
  assert!(crashed.join().is_err());

  // The lock was released during unwinding; later operations proceed.
  array.push(2);
  assert_eq!(array.values(), vec![1, 2]);
}
