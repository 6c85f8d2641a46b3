// C entry points. Strings returned to the caller must be released with
// `geez_free_string`; panics never cross the boundary.
use crate::core::decoder::{decode, decode_strict};
use crate::core::encoder::{encode, to_geez};
use libc::c_char;
use serde_json::Number;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use tracing::error;

fn into_raw_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// Borrows a caller string, replacing invalid UTF-8 with U+FFFD.
unsafe fn borrow_input<'a>(input: *const c_char) -> Option<std::borrow::Cow<'a, str>> {
    if input.is_null() {
        None
    } else {
        Some(CStr::from_ptr(input).to_string_lossy())
    }
}

/// Canonical numeral for `value`. Never null except on allocation failure.
#[no_mangle]
pub extern "C" fn geez_encode(value: u64) -> *mut c_char {
    let numeral = catch_unwind(|| to_geez(value)).unwrap_or_else(|_| {
        error!(value, "panic in geez_encode");
        String::new()
    });
    into_raw_string(numeral)
}

/// Lenient decode. A null pointer decodes to 0.
///
/// # Safety
/// `numeral` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn geez_decode(numeral: *const c_char) -> u64 {
    match borrow_input(numeral) {
        Some(text) => catch_unwind(AssertUnwindSafe(|| decode(&text))).unwrap_or_else(|_| {
            error!("panic in geez_decode");
            0
        }),
        None => 0,
    }
}

/// Strict decode into `out`. Returns 0 on success and -1 on any rejection,
/// leaving `out` untouched.
///
/// # Safety
/// `numeral` must be null or point to a NUL-terminated string; `out` must be
/// null or valid for a `u64` write.
#[no_mangle]
pub unsafe extern "C" fn geez_decode_strict(numeral: *const c_char, out: *mut u64) -> i32 {
    let Some(text) = borrow_input(numeral) else {
        return -1;
    };
    if out.is_null() {
        return -1;
    }
    match catch_unwind(AssertUnwindSafe(|| decode_strict(&text))) {
        Ok(Ok(value)) => {
            *out = value;
            0
        }
        Ok(Err(_)) => -1,
        Err(_) => {
            error!("panic in geez_decode_strict");
            -1
        }
    }
}

fn encode_batch(values_json: &str) -> crate::error::Result<String> {
    let values: Vec<Number> = serde_json::from_str(values_json)?;
    let numerals: Vec<Option<String>> = values
        .iter()
        .map(|number| match number.as_u64() {
            Some(value) => Some(to_geez(value)),
            None => number
                .as_i64()
                .map(encode)
                .or_else(|| number.as_f64().map(encode))
                .and_then(|encoded| encoded.ok()),
        })
        .collect();
    Ok(serde_json::to_string(&numerals)?)
}

/// Encodes a JSON array of numbers into a JSON array of numerals, with
/// `null` in place of every value `encode` rejects. Returns null when the
/// input is not a JSON array of numbers.
///
/// # Safety
/// `values_json` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn geez_encode_batch_json(values_json: *const c_char) -> *mut c_char {
    let Some(text) = borrow_input(values_json) else {
        return ptr::null_mut();
    };
    match catch_unwind(AssertUnwindSafe(|| encode_batch(&text))) {
        Ok(Ok(json)) => into_raw_string(json),
        Ok(Err(err)) => {
            error!(%err, "rejected batch input");
            ptr::null_mut()
        }
        Err(_) => {
            error!("panic in geez_encode_batch_json");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `s` must be null or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn geez_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_string(raw: *mut c_char) -> String {
        assert!(!raw.is_null());
        let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_owned();
        unsafe { geez_free_string(raw) };
        text
    }

    #[test]
    fn encode_and_decode_through_c_strings() {
        let numeral = take_string(geez_encode(20_000));
        assert_eq!(numeral, "፪፼");

        let c_numeral = CString::new(numeral).unwrap();
        assert_eq!(unsafe { geez_decode(c_numeral.as_ptr()) }, 20_000);
        assert_eq!(unsafe { geez_decode(ptr::null()) }, 0);
    }

    #[test]
    fn strict_reports_status() {
        let mut out = 0u64;
        let good = CString::new("፻").unwrap();
        assert_eq!(unsafe { geez_decode_strict(good.as_ptr(), &mut out) }, 0);
        assert_eq!(out, 100);

        let bad = CString::new("፩፻").unwrap();
        assert_eq!(unsafe { geez_decode_strict(bad.as_ptr(), &mut out) }, -1);
        assert_eq!(out, 100);
    }

    #[test]
    fn batch_json_marks_rejected_values() {
        let input = CString::new("[1, 100, -1, 3.5, 10000]").unwrap();
        let json = take_string(unsafe { geez_encode_batch_json(input.as_ptr()) });
        assert_eq!(json, r#"["፩","፻",null,null,"፼"]"#);

        let garbage = CString::new("{").unwrap();
        assert!(unsafe { geez_encode_batch_json(garbage.as_ptr()) }.is_null());
    }
}
