//! Integer addition entry point.

/// Adds two integers, wrapping on overflow.
///
/// Exported under the exact symbol name `Add` so hosts can bind it by name.
#[no_mangle]
pub extern "C" fn Add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
