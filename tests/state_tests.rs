// Host-side tests for the view store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod state {
    include!("../src/core/state.rs");
}

use state::*;
use std::cell::RefCell;
use std::rc::Rc;

fn counting_store(catalog_len: usize) -> (ViewStore, Rc<RefCell<usize>>) {
    let mut store = ViewStore::new(catalog_len);
    let count = Rc::new(RefCell::new(0usize));
    let count_in = count.clone();
    store.subscribe(move |_, _| {
        *count_in.borrow_mut() += 1;
    });
    // subscribe plays back once; discount it
    *count.borrow_mut() = 0;
    (store, count)
}

#[test]
fn mode_follows_most_recent_call() {
    let mut store = ViewStore::new(6);
    assert_eq!(store.mode(), ViewMode::Overview);
    store.enter_focus();
    assert_eq!(store.mode(), ViewMode::Focus);
    store.enter_overview();
    store.enter_focus();
    store.enter_focus();
    assert_eq!(store.mode(), ViewMode::Focus);
}

#[test]
fn idempotent_mutators_are_silent() {
    let (mut store, count) = counting_store(6);
    store.enter_focus();
    assert_eq!(*count.borrow(), 1);
    // already focused: no additional observable change
    store.enter_focus();
    assert_eq!(*count.borrow(), 1);
    store.enter_overview();
    store.enter_overview();
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn subscribe_plays_back_current_snapshot() {
    let mut store = ViewStore::new(6);
    store.enter_focus();
    store.next_project();
    let seen = Rc::new(RefCell::new(None));
    let seen_in = seen.clone();
    store.subscribe(move |mode, index| {
        *seen_in.borrow_mut() = Some((mode, index));
    });
    assert_eq!(*seen.borrow(), Some((ViewMode::Focus, 1)));
}

#[test]
fn listeners_run_in_registration_order() {
    let mut store = ViewStore::new(6);
    let order = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let order_in = order.clone();
        store.subscribe(move |_, _| order_in.borrow_mut().push(id));
    }
    order.borrow_mut().clear();
    store.enter_focus();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn index_wraps_both_directions() {
    // N = 6, the built-in catalog length
    let mut store = ViewStore::new(6);
    store.prev_project();
    assert_eq!(store.current_project_index(), 5);
    store.next_project();
    assert_eq!(store.current_project_index(), 0);
    for _ in 0..6 {
        store.next_project();
    }
    assert_eq!(store.current_project_index(), 0);
}

#[test]
fn k_steps_match_modular_arithmetic() {
    for n in [1usize, 2, 3, 6, 7] {
        for k in 0..3 * n + 1 {
            let mut fwd = ViewStore::new(n);
            let mut back = ViewStore::new(n);
            for _ in 0..k {
                fwd.next_project();
                back.prev_project();
            }
            assert_eq!(fwd.current_project_index(), k % n, "n={} k={}", n, k);
            assert_eq!(
                back.current_project_index(),
                (n - (k % n)) % n,
                "n={} k={}",
                n,
                k
            );
        }
    }
}

#[test]
fn next_then_prev_restores_index() {
    let mut store = ViewStore::new(6);
    for start in 0..6 {
        assert_eq!(store.current_project_index(), start);
        store.next_project();
        store.prev_project();
        assert_eq!(store.current_project_index(), start);
        store.next_project();
    }
}

#[test]
fn single_entry_catalog_never_notifies_on_step() {
    let (mut store, count) = counting_store(1);
    store.next_project();
    store.prev_project();
    assert_eq!(store.current_project_index(), 0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn laptop_click_handler_fires_focus_exactly_once() {
    // The canvas handler is conditioned on the current mode, so a second
    // click while already focused must not re-enter focus.
    let (mut store, count) = counting_store(6);
    let click = |store: &mut ViewStore| {
        if store.mode() == ViewMode::Overview {
            store.enter_focus();
        }
    };
    click(&mut store);
    assert_eq!(store.mode(), ViewMode::Focus);
    assert_eq!(*count.borrow(), 1);
    click(&mut store);
    assert_eq!(*count.borrow(), 1);
}
