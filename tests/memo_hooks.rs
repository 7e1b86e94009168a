//! Memoization check. Lives in its own test binary so the global compose
//! counter is not shared with other tests.

#![cfg(feature = "test-hooks")]

use monogram_core::compositor::{get_compose_call_count, reset_compose_call_count};
use monogram_core::{DesignSession, FontChoice};

#[test]
fn invariant_preview_is_memoized() {
    reset_compose_call_count();
    let mut session = DesignSession::new();
    let first = session.preview();
    let second = session.preview();
    assert_eq!(first, second);
    assert_eq!(get_compose_call_count(), 1);

    session.set_font(FontChoice::AlexBrush);
    assert!(session.preview().is_some());
    assert_eq!(get_compose_call_count(), 2);

    // only the last input is remembered, so going back recomposes
    session.set_font(FontChoice::Arial);
    assert_eq!(session.preview(), first);
    assert_eq!(get_compose_call_count(), 3);
    assert_eq!(session.preview(), first);
    assert_eq!(get_compose_call_count(), 3);
}
