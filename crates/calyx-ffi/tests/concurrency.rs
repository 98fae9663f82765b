//! Handle tables under concurrent callers.
//!
//! Distinct handles may be used from different threads at once; each
//! thread's last-error slot stays private to it.

use std::ffi::c_char;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use calyx_ffi::last_error::{calyx_clear_last_error, calyx_last_error_message};
use calyx_ffi::matrix::{
    calyx_matrix_create, calyx_matrix_destroy, calyx_matrix_get, calyx_matrix_multiply,
    calyx_matrix_rows, calyx_matrix_set,
};
use calyx_ffi::vector::*;
use calyx_ffi::{CalyxStatus, CALYX_INVALID_HANDLE};

const THREADS: i32 = 8;
const PER_THREAD: i32 = 200;

fn last_error() -> String {
    let mut buf = [0 as c_char; 128];
    let len = calyx_last_error_message(buf.as_mut_ptr(), buf.len());
    let bytes: Vec<u8> = buf[..len.min(127)].iter().map(|&c| c as u8).collect();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn threads_own_independent_vectors() {
    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                let v = calyx_vector_create();
                assert_ne!(v, CALYX_INVALID_HANDLE);
                for i in 0..PER_THREAD {
                    calyx_vector_add(v, t * 1000 + i);
                }
                let size = calyx_vector_size(v);
                let first = calyx_vector_get(v, 0);
                assert_eq!(calyx_vector_destroy(v), CalyxStatus::Success as i32);
                (size, first)
            })
        })
        .collect();

    for (t, w) in workers.into_iter().enumerate() {
        let (size, first) = w.join().unwrap();
        assert_eq!(size, PER_THREAD);
        assert_eq!(first, t as i32 * 1000);
    }
}

#[test]
fn shared_handle_serialises_writes() {
    let v = calyx_vector_create();
    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    calyx_vector_add(v, 1);
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
    assert_eq!(calyx_vector_size(v), THREADS * PER_THREAD);
    assert_eq!(calyx_vector_sum(v), THREADS * PER_THREAD);
    calyx_vector_destroy(v);
}

#[test]
fn handles_are_unique_across_threads() {
    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                (0..50)
                    .map(|_| calyx_matrix_create(1, 1))
                    .collect::<Vec<u64>>()
            })
        })
        .collect();
    let mut all: Vec<u64> = workers
        .into_iter()
        .flat_map(|w| w.join().unwrap())
        .collect();
    let total = all.len();
    for &h in &all {
        calyx_matrix_set(h, 0, 0, 1.0);
        assert_eq!(calyx_matrix_get(h, 0, 0), 1.0);
    }
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
    for h in all {
        assert_eq!(calyx_matrix_destroy(h), CalyxStatus::Success as i32);
    }
}

#[test]
fn errors_do_not_cross_threads() {
    calyx_clear_last_error();
    let v = calyx_vector_create();
    let worker = thread::spawn(move || {
        let mut out = 0;
        calyx_vector_safe_get(v, 5, &mut out);
        last_error()
    });
    let theirs = worker.join().unwrap();
    assert_eq!(theirs, "index 5 out of bounds for length 0");
    assert_eq!(last_error(), "");
    calyx_vector_destroy(v);
}

#[test]
fn long_multiply_does_not_stall_other_matrices() {
    const N: i32 = 500;
    let big = calyx_matrix_create(N, N);
    for i in 0..N {
        calyx_matrix_set(big, i, i, 2.0);
    }
    let small = calyx_matrix_create(1, 1);

    let (started_tx, started_rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        started_tx.send(Instant::now()).unwrap();
        let product = calyx_matrix_multiply(big, big);
        (product, Instant::now())
    });
    let started = started_rx.recv().unwrap();
    thread::sleep(Duration::from_millis(20));
    assert_eq!(calyx_matrix_rows(small), 1);
    calyx_matrix_set(small, 0, 0, 3.0);
    let read_done = Instant::now();

    let (product, multiply_done) = worker.join().unwrap();
    assert_ne!(product, CALYX_INVALID_HANDLE);
    assert_eq!(calyx_matrix_get(product, N - 1, N - 1), 4.0);
    let read = read_done - started;
    let multiply = multiply_done - started;
    assert!(
        read < multiply / 2,
        "calls on an unrelated matrix took {read:?} while the product took {multiply:?}"
    );

    for h in [big, small, product] {
        assert_eq!(calyx_matrix_destroy(h), CalyxStatus::Success as i32);
    }
}
