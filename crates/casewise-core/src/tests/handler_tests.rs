//! Tests for [`Handler`].

use std::cell::Cell;
use std::rc::Rc;

use crate::Handler;

#[test]
fn value_handler_returns_stored_result() {
    let handler: Handler<i32, String> = Handler::value(String::from("fixed"));
    assert_eq!(handler.resolve(&1), "fixed");
    assert_eq!(handler.resolve(&2), "fixed");
    assert!(!handler.is_callable());
}

#[test]
fn lazy_handler_ignores_subject() {
    let handler: Handler<i32, i32> = Handler::lazy(|| 42);
    assert_eq!(handler.resolve(&-1), 42);
    assert!(handler.is_callable());
}

#[test]
fn computed_handler_receives_subject() {
    let handler: Handler<String, usize> = Handler::computed(String::len);
    assert_eq!(handler.resolve(&String::from("four")), 4);
    assert!(handler.is_callable());
}

#[test]
fn computed_handler_runs_on_every_resolve() {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    let handler: Handler<(), u32> = Handler::lazy(move || {
        counter.set(counter.get() + 1);
        counter.get()
    });
    assert_eq!(handler.resolve(&()), 1);
    assert_eq!(handler.resolve(&()), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn callable_result_is_expressible_as_value() {
    let handler: Handler<i32, fn(i32) -> i32> = Handler::value(|n| n + 1);
    let produced = handler.resolve(&0);
    assert_eq!(produced(1), 2);
}

#[test]
fn debug_hides_closures() {
    let value: Handler<i32, i32> = Handler::value(3);
    let computed: Handler<i32, i32> = Handler::computed(|n: &i32| *n);
    assert_eq!(format!("{value:?}"), "Value(3)");
    assert_eq!(format!("{computed:?}"), "Computed(..)");
}
