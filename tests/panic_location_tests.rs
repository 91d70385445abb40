//! The throwing extraction forms report the caller's location, not a line
//! inside the library.

use functional_sum::prelude::*;
use rstest::rstest;
use std::cell::RefCell;
use std::sync::Once;

static HOOK: Once = Once::new();

thread_local! {
    static LAST_LOCATION: RefCell<std::option::Option<String>> = const { RefCell::new(None) };
}

fn record_panic_locations() {
    HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info.location().map(|location| location.file().to_string());
            LAST_LOCATION.with(|last| *last.borrow_mut() = location);
        }));
    });
}

fn location_of<T>(function: impl FnOnce() -> T + std::panic::UnwindSafe) -> String {
    record_panic_locations();
    LAST_LOCATION.with(|last| last.borrow_mut().take());
    assert!(catch(function).is_error());
    LAST_LOCATION
        .with(|last| last.borrow_mut().take())
        .unwrap_or_default()
}

#[rstest]
fn test_option_unwrap_and_expect_report_caller() {
    assert_eq!(location_of(|| none::<i32>().unwrap()), file!());
    assert_eq!(location_of(|| none::<i32>().expect("needed")), file!());
}

#[rstest]
fn test_result_extraction_reports_caller() {
    assert_eq!(location_of(|| error::<i32, &str>("bad").unwrap()), file!());
    assert_eq!(location_of(|| error::<i32, &str>("bad").expect("needed")), file!());
    assert_eq!(location_of(|| ok::<i32, &str>(1).unwrap_error()), file!());
    assert_eq!(location_of(|| ok::<i32, &str>(1).expect_error("needed")), file!());
    assert_eq!(location_of(|| error::<i32, &str>("bad").unwrap_or_report()), file!());
}

#[rstest]
fn test_one_of_extraction_reports_caller() {
    let value: OneOf2<i32, bool> = OneOf2::Second(true);
    assert_eq!(location_of(move || value.unwrap::<i32, _>()), file!());
    assert_eq!(location_of(move || value.expect::<i32, _>("needed")), file!());
}
