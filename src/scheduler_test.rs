use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<(&'static str, u64)>>>, ManualScheduler) {
    (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
}

#[test]
fn nothing_runs_before_due() {
    let (log, clock) = recorder();
    let log_cb = Rc::clone(&log);
    let clock_cb = clock.clone();
    clock.schedule(100, Box::new(move || log_cb.borrow_mut().push(("a", clock_cb.now()))));

    clock.advance(99);
    assert!(log.borrow().is_empty());
    assert_eq!(clock.pending(), 1);

    clock.advance(1);
    assert_eq!(*log.borrow(), vec![("a", 100)]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn tasks_run_in_due_order_then_schedule_order() {
    let (log, clock) = recorder();
    for (name, delay) in [("late", 50), ("early", 10), ("tie-1", 30), ("tie-2", 30)] {
        let log_cb = Rc::clone(&log);
        let clock_cb = clock.clone();
        clock.schedule(delay, Box::new(move || log_cb.borrow_mut().push((name, clock_cb.now()))));
    }

    clock.advance(1000);
    assert_eq!(*log.borrow(), vec![("early", 10), ("tie-1", 30), ("tie-2", 30), ("late", 50)]);
    assert_eq!(clock.now(), 1000);
}

#[test]
fn nested_tasks_run_within_same_advance() {
    let (log, clock) = recorder();
    let log_outer = Rc::clone(&log);
    let clock_outer = clock.clone();
    clock.schedule(
        20,
        Box::new(move || {
            log_outer.borrow_mut().push(("outer", clock_outer.now()));
            let log_inner = Rc::clone(&log_outer);
            let clock_inner = clock_outer.clone();
            clock_outer.schedule(5, Box::new(move || log_inner.borrow_mut().push(("inner", clock_inner.now()))));
        }),
    );

    clock.advance(30);
    assert_eq!(*log.borrow(), vec![("outer", 20), ("inner", 25)]);
}

#[test]
fn nested_task_past_target_waits() {
    let (log, clock) = recorder();
    let log_outer = Rc::clone(&log);
    let clock_outer = clock.clone();
    clock.schedule(
        10,
        Box::new(move || {
            let log_inner = Rc::clone(&log_outer);
            clock_outer.schedule(100, Box::new(move || log_inner.borrow_mut().push(("inner", 0))));
        }),
    );

    clock.advance(50);
    assert!(log.borrow().is_empty());
    assert_eq!(clock.pending(), 1);
    clock.advance(60);
    assert_eq!(log.borrow().len(), 1);
}
