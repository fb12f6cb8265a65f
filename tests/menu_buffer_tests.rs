//! Bounded text buffer tests

use std::fmt::Write;

use serial_menu::config::{ENTRY_FIELD_SIZE, MENU_BUFFER_SIZE};
use serial_menu::menu::buffer::LineBuffer;
use serial_menu::menu::Entry;

#[test]
fn test_capacity_follows_type() {
    let small = LineBuffer::<3>::new();
    let page = LineBuffer::<MENU_BUFFER_SIZE>::new();
    let entry = Entry::new();

    assert_eq!(small.capacity(), 3);
    assert_eq!(page.capacity(), MENU_BUFFER_SIZE);
    assert_eq!(entry.capacity(), ENTRY_FIELD_SIZE);
}

#[test]
fn test_push_str_stops_before_split_char() {
    let mut buf = LineBuffer::<5>::new();

    // "€" is three bytes and would straddle the end
    buf.push_str("abc\u{20ac}");

    assert_eq!(buf.as_str(), "abc");
    assert_eq!(buf.len(), 3);
    assert!(!buf.is_full());
    assert!(buf.is_truncated());
}

#[test]
fn test_push_str_appends() {
    let mut buf = LineBuffer::<16>::new();

    buf.push_str("New Value [");
    buf.push_str("red]");

    assert_eq!(buf, "New Value [red]");
    assert!(!buf.is_truncated());
}

#[test]
fn test_set_replaces_and_resets_truncation() {
    let mut buf = LineBuffer::<8>::new();

    buf.set("Sample Main Menu Action I");
    assert_eq!(buf.as_str(), "Sample M");
    assert!(buf.is_full());
    assert!(buf.is_truncated());

    buf.set("Beta");
    assert_eq!(buf.as_str(), "Beta");
    assert!(!buf.is_full());
    assert!(!buf.is_truncated());
}

#[test]
fn test_push_into_full_buffer_is_refused() {
    let mut buf = LineBuffer::<2>::new();

    assert!(buf.push(b'0'));
    assert!(buf.push(b'1'));
    assert!(!buf.push(b'2'));

    assert_eq!(buf.as_str(), "01");
    assert!(buf.is_truncated());
}

#[test]
fn test_write_macro_truncates_silently() {
    let mut buf = LineBuffer::<12>::new();

    assert!(write!(buf, "Memory Available: {}", 4096).is_ok());

    assert_eq!(buf.as_str(), "Memory Avail");
    assert!(buf.is_truncated());
}

#[test]
fn test_raw_bytes_show_valid_prefix() {
    let mut buf = LineBuffer::<8>::new();

    for byte in "ok\u{e9}".bytes().take(3) {
        buf.push(byte);
    }

    // Lead byte without its continuation
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_str(), "ok");

    buf.trim_partial_char();
    assert_eq!(buf.as_bytes(), b"ok");
}

#[test]
fn test_backspace_on_empty_buffer() {
    let mut buf = Entry::new();

    buf.backspace();

    assert!(buf.is_empty());
}
