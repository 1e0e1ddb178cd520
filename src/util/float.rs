/// Tolerance used when comparing floats that went through trigonometry or square roots.
#[allow(unused)]
pub const EPSILON: f64 = 1e-9;

#[allow(unused_macros)]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, "values are not approximately equal")
    };
    ($left:expr, $right:expr, $msg:literal) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $crate::util::float::EPSILON,
            "{}: {} != {}",
            $msg,
            left,
            right
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_approx_eq;
