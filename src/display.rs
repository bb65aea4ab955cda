/// Per-type rendering rule for container elements. Floating point types are
/// shown with four fractional digits, everything else with its `Display`
/// output. A new element type opts in with a single impl.
pub trait FormatElement {
    fn format_element(&self) -> String;
}

macro_rules! plain_format {
    ( $( $t:ty ),* ) => {
        $(
            impl FormatElement for $t {
                fn format_element(&self) -> String {
                    format!("{}", self)
                }
            }
        )*
    };
}

macro_rules! fixed_format {
    ( $( $t:ty ),* ) => {
        $(
            impl FormatElement for $t {
                fn format_element(&self) -> String {
                    format!("{:.4}", self)
                }
            }
        )*
    };
}

plain_format!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
fixed_format!(f32, f64);

/// Formats each value and joins them with `delim`. An empty slice gives an
/// empty string.
pub fn join<T: FormatElement>(vals: &[T], delim: &str) -> String {
    vals.iter()
        .map(FormatElement::format_element)
        .collect::<Vec<_>>()
        .join(delim)
}
