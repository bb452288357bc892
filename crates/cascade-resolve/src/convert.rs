//! Typed attribute conversion
//!
//! Converting never fails: malformed or missing input yields the supplied
//! default.

/// Conversion from a resolved attribute string
pub trait FromAttr: Sized {
    fn from_attr(value: Option<&str>, default: Self) -> Self;
}

macro_rules! impl_from_attr_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromAttr for $ty {
                fn from_attr(value: Option<&str>, default: Self) -> Self {
                    value
                        .and_then(|v| v.trim().parse::<$ty>().ok())
                        .unwrap_or(default)
                }
            }
        )*
    };
}

impl_from_attr_parse!(i32, i64, u32, u64, f32, f64);

impl FromAttr for bool {
    fn from_attr(value: Option<&str>, default: Self) -> Self {
        let Some(value) = value else {
            return default;
        };
        let value = value.trim();
        if value.eq_ignore_ascii_case("true") || value == "1" {
            true
        } else if value.eq_ignore_ascii_case("false") || value == "0" {
            false
        } else {
            default
        }
    }
}

impl FromAttr for String {
    fn from_attr(value: Option<&str>, default: Self) -> Self {
        value.map(str::to_string).unwrap_or(default)
    }
}
