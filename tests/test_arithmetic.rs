use linalg::{LinalgError, Matrix, Vector};
use proptest::prelude::*;
use seq_macro::seq;

extern crate linalg;

#[test]
fn test_scalar_operand_order() {
    let a = Matrix::<f64, 2, 2>::from([[1.0, 2.0], [3.0, 4.0]]);

    assert_eq!(10.0 - a, Matrix::from([[9.0, 8.0], [7.0, 6.0]]));
    assert_eq!(a - 10.0, Matrix::from([[-9.0, -8.0], [-7.0, -6.0]]));
    assert_eq!(1.0 / a, Matrix::from([[1.0, 0.5], [1.0 / 3.0, 0.25]]));
    assert_eq!(a / 2.0, Matrix::from([[0.5, 1.0], [1.5, 2.0]]));
}

#[test]
fn test_vector_self_subtraction() {
    let mut v: Vector<f64> = Vector::from([2.0, 3.0]);
    let same = v.clone();
    v -= &same;
    assert_eq!(v, Vector::from([0.0, 0.0]));
}

#[test]
fn test_display() {
    let v: Vector<f64> = Vector::from([2.0, 3.0]);
    assert_eq!(v.to_string(), "[2.0000, 3.0000]");

    let m = Matrix::<f64, 2, 2>::from([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(m.to_string(), "> [1.0000, 2.0000]\n> [3.0000, 4.0000]");
}

seq!(R in 1..=4 {
    seq!(C in 1..=4 {
        proptest! {
            #[test]
            fn test_add_inverse_~R~C(v_a in prop::collection::vec(-10000i64..10000, R * C),
                                     v_b in prop::collection::vec(-10000i64..10000, R * C)) {
                let a: Matrix<i64, R, C> = v_a.into_iter().collect();
                let b: Matrix<i64, R, C> = v_b.into_iter().collect();

                prop_assert_eq!((a + b) - b, a);
                prop_assert_eq!(a + b, b + a);

                let mut c = a + b;
                c -= b;
                prop_assert_eq!(c, a);
            }

            #[test]
            fn test_scalar_broadcast_~R~C(v_a in prop::collection::vec(-10000i64..10000, R * C),
                                          s in -10000i64..10000) {
                let a: Matrix<i64, R, C> = v_a.into_iter().collect();

                prop_assert_eq!(s + a, a + s);
                prop_assert_eq!(s - a, -(a - s));
                prop_assert_eq!(s * a, a * s);
                for i in 0..R {
                    for j in 0..C {
                        prop_assert_eq!((s - a)[(i, j)], s - a[(i, j)]);
                        prop_assert_eq!((a - s)[(i, j)], a[(i, j)] - s);
                    }
                }
            }
        }
    });
});

proptest! {
    #[test]
    fn test_vector_laws(v_a in prop::collection::vec(-10000i64..10000, 0..32), s in -100i64..100) {
        let a: Vector<i64> = v_a.iter().copied().collect();
        let b: Vector<i64> = v_a.iter().rev().copied().collect();

        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(s + &a, &a + s);
        prop_assert_eq!(s - &a, -(&a - s));

        let mut c = a.clone();
        c -= &a;
        prop_assert_eq!(c, Vector::zeros(a.len()));
    }

    #[test]
    fn test_vector_length_mismatch(n in 0usize..16, m in 0usize..16) {
        prop_assume!(n != m);
        let a: Vector<f64> = Vector::zeros(n);
        let b: Vector<f64> = Vector::zeros(m);
        let err = LinalgError::ShapeMismatch { op: "elementwise operation", left: n, right: m };

        prop_assert_eq!(a.try_add(&b), Err(err.clone()));
        prop_assert_eq!(a.try_div(&b), Err(err));
    }
}
