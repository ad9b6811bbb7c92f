//! Precondition checks for contract violations that should never be recovered from, such as
//! indexing past the end of a fixed-size value or sampling an empty range.

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
pub(crate) use current_location;

macro_rules! check {
    ($cond:expr) => {{
        $crate::assert::assert_type::<bool>(&$cond);
        if !$cond {
            panic!(
                "check failed: {}: {}",
                $crate::assert::current_location!(),
                stringify!($cond),
            );
        }
    }};
    ($cond:expr, $($msg:tt)+) => {{
        $crate::assert::assert_type::<bool>(&$cond);
        if !$cond {
            panic!(
                "check failed: {}: {}: {}",
                $crate::assert::current_location!(),
                stringify!($cond),
                format!($($msg)+),
            );
        }
    }};
}
pub(crate) use check;

// Both sides are evaluated once so that the panic message reports the values that failed.
macro_rules! check_cmp {
    ($lhs:expr, $op:tt, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        $crate::assert::assert_same_type(&lhs, &rhs);
        $crate::assert::assert_ord(&lhs);
        if !(lhs $op rhs) {
            panic!(
                "check failed: {}: {} {} {}: {:?} vs. {:?}",
                $crate::assert::current_location!(),
                stringify!($lhs),
                stringify!($op),
                stringify!($rhs),
                lhs,
                rhs,
            );
        }
    }};
}
pub(crate) use check_cmp;

macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert::check_cmp!($lhs, <, $rhs)
    };
}
pub(crate) use check_lt;

macro_rules! check_le {
    ($lhs:expr, $rhs:expr) => {
        $crate::assert::check_cmp!($lhs, <=, $rhs)
    };
}
pub(crate) use check_le;

#[cfg(test)]
mod tests {
    #[test]
    fn passing_checks_are_silent() {
        check!(1 + 1 == 2);
        check_lt!(1, 2);
        check_le!(2, 2);
        check_le!(-0.5, 0.0);
    }

    #[test]
    #[should_panic(expected = "3 < 2: 3 vs. 2")]
    fn check_lt_reports_expression_and_values() {
        check_lt!(3, 2);
    }

    #[test]
    #[should_panic(expected = "len <= 1")]
    fn check_le_reports_expression() {
        let len = 2_usize;
        check_le!(len, 1);
    }

    #[test]
    #[should_panic(expected = "index 4 out of range")]
    fn check_formats_message() {
        let index = 4;
        check!(index < 2, "index {index} out of range");
    }
}
