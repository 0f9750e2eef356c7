//! Allocation accounting for release.
//!
//! Installs a counting global allocator, so this file is its own test
//! binary. Counters are thread-local and only armed inside `frees_during`,
//! which keeps concurrently running tests out of the tally.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    ffi::c_char,
};

use modu_ffi::{exports::modu_free_string, exports::modu_value_release, BoundaryValue};

struct CountingAllocator;

thread_local! {
    static ARMED: Cell<bool> = const { Cell::new(false) };
    static FREES: Cell<usize> = const { Cell::new(0) };
    static LAST_FREED: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = ARMED.try_with(|armed| {
            if armed.get() {
                let _ = FREES.try_with(|frees| frees.set(frees.get() + 1));
                let _ = LAST_FREED.try_with(|last| last.set(ptr as usize));
            }
        });
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

/// Run `f` and return the number of deallocations it made on this thread
/// and the address of the last one.
fn frees_during(f: impl FnOnce()) -> (usize, usize) {
    FREES.with(|frees| frees.set(0));
    LAST_FREED.with(|last| last.set(0));
    ARMED.with(|armed| armed.set(true));
    f();
    ARMED.with(|armed| armed.set(false));
    (FREES.with(Cell::get), LAST_FREED.with(Cell::get))
}

#[test]
fn test_text_release_frees_exactly_its_buffer() {
    let value = BoundaryValue::text("hello").unwrap();
    let buffer = value.as_c_str().unwrap().as_ptr() as usize;

    let (frees, last) = frees_during(|| value.release());
    assert_eq!(frees, 1);
    assert_eq!(last, buffer);
}

#[test]
fn test_plain_release_frees_nothing() {
    for value in [
        BoundaryValue::absent(),
        BoundaryValue::integer(42),
        BoundaryValue::float(f64::NAN),
        BoundaryValue::boolean(true),
    ] {
        let (frees, _) = frees_during(|| value.release());
        assert_eq!(frees, 0);
    }
}

#[test]
fn test_c_release_paths_free_once() {
    let raw = BoundaryValue::text("raw").unwrap().into_raw();
    let buffer = unsafe { raw.payload.text } as usize;
    let (frees, last) = frees_during(|| unsafe { modu_value_release(raw) });
    assert_eq!((frees, last), (1, buffer));

    let raw = BoundaryValue::text("string").unwrap().into_raw();
    let text: *mut c_char = unsafe { raw.payload.text };
    let (frees, last) = frees_during(|| unsafe { modu_free_string(text) });
    assert_eq!((frees, last), (1, text as usize));

    let (frees, _) = frees_during(|| unsafe { modu_free_string(std::ptr::null_mut()) });
    assert_eq!(frees, 0);

    let (frees, _) = frees_during(|| unsafe { modu_value_release(BoundaryValue::integer(1).into_raw()) });
    assert_eq!(frees, 0);
}
