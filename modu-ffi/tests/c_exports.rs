//! Tests for the C ABI surface, called the way foreign code calls it.

use std::{
    ffi::{c_char, CStr},
    ptr,
};

use modu_ffi::{
    exports::{
        modu_free_string, modu_value_absent, modu_value_as_boolean, modu_value_as_float,
        modu_value_as_integer, modu_value_as_text, modu_value_boolean, modu_value_float,
        modu_value_integer, modu_value_release, modu_value_text,
    },
    BoundaryValue, FfiStatus, RawPayload, RawValue, ValueTag,
};

fn new_text(bytes: &[u8]) -> RawValue {
    let mut out = modu_value_absent();
    let status = unsafe { modu_value_text(bytes.as_ptr().cast(), bytes.len(), &mut out) };
    assert_eq!(status, FfiStatus::Ok);
    out
}

#[test]
fn test_text_export_and_borrow() {
    let value = new_text(b"from c");
    assert_eq!(value.tag, ValueTag::Text.as_u8());

    let mut text: *const c_char = ptr::null();
    let mut len = 0usize;
    let status = unsafe { modu_value_as_text(&value, &mut text, &mut len) };
    assert_eq!(status, FfiStatus::Ok);
    assert_eq!(len, 6);
    assert_eq!(unsafe { CStr::from_ptr(text) }.to_bytes(), b"from c");

    unsafe { modu_value_release(value) };
}

#[test]
fn test_text_export_stops_at_nul_and_accepts_empty() {
    let value = new_text(b"ab\0cd");
    let mut text: *const c_char = ptr::null();
    let mut len = usize::MAX;
    assert_eq!(unsafe { modu_value_as_text(&value, &mut text, &mut len) }, FfiStatus::Ok);
    assert_eq!(len, 2);
    unsafe { modu_value_release(value) };

    let mut out = modu_value_absent();
    assert_eq!(unsafe { modu_value_text(ptr::null(), 0, &mut out) }, FfiStatus::Ok);
    assert_eq!(out.tag, ValueTag::Text.as_u8());
    unsafe { modu_value_release(out) };
}

#[test]
fn test_scalar_exports() {
    let mut integer = 0i64;
    let mut float = 0.0f64;
    let mut boolean = false;

    unsafe {
        assert_eq!(modu_value_as_integer(&modu_value_integer(-99), &mut integer), FfiStatus::Ok);
        assert_eq!(
            modu_value_as_float(&modu_value_float(f64::from_bits(0x7ff8_dead_beef_0001)), &mut float),
            FfiStatus::Ok
        );
        assert_eq!(modu_value_as_boolean(&modu_value_boolean(true), &mut boolean), FfiStatus::Ok);
    }

    assert_eq!(integer, -99);
    assert_eq!(float.to_bits(), 0x7ff8_dead_beef_0001);
    assert!(boolean);
}

#[test]
fn test_wrong_variant_status_leaves_output_untouched() {
    let mut float = 1.5f64;
    let status = unsafe { modu_value_as_float(&modu_value_integer(-1), &mut float) };
    assert_eq!(status, FfiStatus::WrongVariant);
    assert_eq!(float, 1.5);

    let mut integer = 0i64;
    let text = new_text(b"x");
    assert_eq!(unsafe { modu_value_as_integer(&text, &mut integer) }, FfiStatus::WrongVariant);
    unsafe { modu_value_release(text) };

    let mut boolean = false;
    assert_eq!(
        unsafe { modu_value_as_boolean(&modu_value_absent(), &mut boolean) },
        FfiStatus::WrongVariant
    );
}

#[test]
fn test_null_pointers_are_reported() {
    let mut integer = 0i64;
    let mut text: *const c_char = ptr::null();
    let mut len = 0usize;
    let value = modu_value_integer(3);

    unsafe {
        assert_eq!(modu_value_as_integer(ptr::null(), &mut integer), FfiStatus::NullPointer);
        assert_eq!(modu_value_as_integer(&value, ptr::null_mut()), FfiStatus::InvalidArgument);
        assert_eq!(modu_value_as_text(&value, ptr::null_mut(), &mut len), FfiStatus::InvalidArgument);
        assert_eq!(modu_value_as_text(&value, &mut text, ptr::null_mut()), FfiStatus::InvalidArgument);
        assert_eq!(modu_value_as_text(ptr::null(), &mut text, &mut len), FfiStatus::NullPointer);
        assert_eq!(modu_value_text(ptr::null(), 1, &mut modu_value_absent()), FfiStatus::InvalidArgument);
    }
}

#[test]
fn test_invalid_tag_status() {
    let value = RawValue {
        tag:     17,
        payload: RawPayload { integer: 0 },
    };
    let mut integer = 0i64;
    assert_eq!(unsafe { modu_value_as_integer(&value, &mut integer) }, FfiStatus::InvalidTag);
    // Nothing to free, nothing freed
    unsafe { modu_value_release(value) };
}

#[test]
fn test_release_and_free_tolerate_non_owning_inputs() {
    unsafe {
        modu_free_string(ptr::null_mut());
        modu_value_release(modu_value_absent());
        modu_value_release(modu_value_integer(1));
        modu_value_release(modu_value_float(f64::NAN));
        modu_value_release(modu_value_boolean(false));
        modu_value_release(RawValue {
            tag:     ValueTag::Text.as_u8(),
            payload: RawPayload {
                text: ptr::null_mut(),
            },
        });
    }
}

#[test]
fn test_free_string_takes_buffer_from_rust_value() {
    let raw = BoundaryValue::text("handed out").unwrap().into_raw();
    let buffer = unsafe { raw.payload.text };
    unsafe { modu_free_string(buffer) };
}
