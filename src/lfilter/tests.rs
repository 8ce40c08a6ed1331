use super::*;
use crate::design::butter_lowpass;
use crate::transfer::TransferFunction;

const TOL: f64 = 1e-12;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

/// Direct evaluation of the difference equation against past inputs and
/// outputs, as an independent reference for the transposed form.
fn direct_form_reference(b: &[f64], a: &[f64], x: &[f64]) -> Vec<f64> {
    let mut y = vec![0.0; x.len()];
    for n in 0..x.len() {
        let mut acc = 0.0;
        for k in 0..b.len() {
            if n >= k {
                acc += b[k] * x[n - k];
            }
        }
        for k in 1..a.len() {
            if n >= k {
                acc -= a[k] * y[n - k];
            }
        }
        y[n] = acc / a[0];
    }
    y
}

fn test_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / 500.0;
            (2.0 * core::f64::consts::PI * 50.0 * t).sin()
                + 0.5 * (2.0 * core::f64::consts::PI * 120.0 * t).sin()
                + if i % 7 == 0 { 0.3 } else { -0.05 }
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════
// lfilter
// ═══════════════════════════════════════════════════════════════════

#[test]
fn first_order_step() {
    let (y, s) = lfilter(&[0.5_f64, 0.5], &[1.0, 0.0], &[1.0, 1.0, 1.0, 1.0], None).unwrap();
    assert_eq!(y, vec![0.5, 1.0, 1.0, 1.0]);
    assert_eq!(s.as_slice(), &[0.5]);
}

#[test]
fn matches_direct_form_reference() {
    let tf = butter_lowpass(4, 60.0_f64, 500.0).unwrap();
    let x = test_signal(300);
    let (y, _) = lfilter(tf.b(), tf.a(), &x, None).unwrap();
    let reference = direct_form_reference(tf.b(), tf.a(), &x);
    for (i, (&u, &v)) in y.iter().zip(&reference).enumerate() {
        assert_near(u, v, 1e-10, &format!("sample {}", i));
    }
}

#[test]
fn zero_input_gives_exact_zeros() {
    let tf = butter_lowpass(6, 30.0_f64, 500.0).unwrap();
    let (y, s) = lfilter(tf.b(), tf.a(), &[0.0; 64], None).unwrap();
    assert!(y.iter().all(|&v| v == 0.0));
    assert!(s.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn empty_input() {
    let state = FilterState::from_vec(vec![0.25, -0.5]);
    let (y, s) = lfilter(&[1.0_f64, 0.0, 0.0], &[1.0, 0.1, 0.2], &[], Some(&state)).unwrap();
    assert!(y.is_empty());
    assert_eq!(s, state);
}

#[test]
fn zeroth_order_is_pure_gain() {
    let (y, s) = lfilter(&[3.0_f64], &[2.0], &[1.0, -2.0], None).unwrap();
    assert_eq!(y, vec![1.5, -3.0]);
    assert!(s.is_empty());
}

#[test]
fn normalizes_leading_denominator() {
    let x = [1.0_f64, 0.5, -0.25, 0.0];
    let (y1, _) = lfilter(&[0.2, 0.4], &[2.0, -1.0], &x, None).unwrap();
    let (y2, _) = lfilter(&[0.1, 0.2], &[1.0, -0.5], &x, None).unwrap();
    for i in 0..4 {
        assert_near(y1[i], y2[i], TOL, "normalized");
    }
}

#[test]
fn chunked_streaming_matches_one_shot() {
    let tf = butter_lowpass(5, 45.0_f64, 500.0).unwrap();
    let x = test_signal(257);
    let (whole, final_whole) = lfilter(tf.b(), tf.a(), &x, None).unwrap();

    for split in [0, 1, 100, 256, 257] {
        let (y1, s1) = lfilter(tf.b(), tf.a(), &x[..split], None).unwrap();
        let (y2, s2) = lfilter(tf.b(), tf.a(), &x[split..], Some(&s1)).unwrap();
        let joined: Vec<f64> = y1.into_iter().chain(y2).collect();
        assert_eq!(joined.len(), whole.len());
        for (u, v) in joined.iter().zip(&whole) {
            assert_near(*u, *v, TOL, "chunked");
        }
        for (u, v) in s2.as_slice().iter().zip(final_whole.as_slice()) {
            assert_near(*u, *v, TOL, "final state");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn rejects_length_mismatch_by_default() {
    let err = lfilter(&[1.0_f64], &[1.0, -0.5], &[1.0], None).unwrap_err();
    assert_eq!(err, FilterError::CoefficientLengthMismatch);
}

#[test]
fn zero_pad_policy_extends_shorter_vector() {
    let settings = FilterSettings {
        length_policy: LengthPolicy::ZeroPad,
    };
    let x = [1.0_f64, 0.0, 0.0, 0.0];
    let (y, s) = lfilter_with(&[1.0], &[1.0, -0.5], &x, None, &settings).unwrap();
    assert_eq!(y, vec![1.0, 0.5, 0.25, 0.125]);
    assert_eq!(s.len(), 1);

    // Longer numerator: FIR through a unit denominator.
    let (y, _) = lfilter_with(&[1.0, 2.0, 3.0], &[1.0], &x, None, &settings).unwrap();
    assert_eq!(y, vec![1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn rejects_bad_denominator() {
    let denom = FilterError::InvalidArgument(Argument::Denominator);
    assert_eq!(lfilter::<f64>(&[], &[], &[1.0], None).unwrap_err(), denom);
    assert_eq!(lfilter(&[1.0_f64, 1.0], &[0.0, 1.0], &[1.0], None).unwrap_err(), denom);
}

#[test]
fn rejects_wrong_state_length() {
    let state = FilterState::zeros(3);
    let err = lfilter(&[1.0_f64, 0.0], &[1.0, 0.5], &[1.0], Some(&state)).unwrap_err();
    assert_eq!(err, FilterError::InvalidArgument(Argument::StateLength));
}

#[test]
fn unstable_filter_overflows() {
    // Pole at z = 2 doubles every sample; 1100 samples exceed f64 range.
    let x = [1.0_f64; 1100];
    let err = lfilter(&[1.0, 0.0], &[1.0, -2.0], &x, None).unwrap_err();
    assert_eq!(err, FilterError::NumericOverflow);
}

#[test]
fn non_finite_input_is_reported() {
    let tf = butter_lowpass(2, 10.0_f64, 100.0).unwrap();
    let err = lfilter(tf.b(), tf.a(), &[1.0, f64::NAN, 1.0], None).unwrap_err();
    assert_eq!(err, FilterError::NumericOverflow);
}

// ═══════════════════════════════════════════════════════════════════
// FilterState
// ═══════════════════════════════════════════════════════════════════

#[test]
fn steady_state_has_no_transient() {
    let tf = butter_lowpass(4, 60.0_f64, 500.0).unwrap();
    let zi = FilterState::steady_state(tf.b(), tf.a(), -3.0).unwrap();
    assert_eq!(zi.len(), 4);
    let (y, zf) = lfilter(tf.b(), tf.a(), &[-3.0; 32], Some(&zi)).unwrap();
    for &v in &y {
        assert_near(v, -3.0, 1e-9, "steady output");
    }
    for (u, v) in zf.as_slice().iter().zip(zi.as_slice()) {
        assert_near(*u, *v, 1e-9, "steady state is a fixed point");
    }
}

#[test]
fn steady_state_matches_long_run() {
    let tf = butter_lowpass(3, 40.0_f64, 500.0).unwrap();
    let (_, settled) = lfilter(tf.b(), tf.a(), &[1.0; 2000], None).unwrap();
    let zi = FilterState::steady_state(tf.b(), tf.a(), 1.0).unwrap();
    for (u, v) in settled.as_slice().iter().zip(zi.as_slice()) {
        assert_near(*u, *v, 1e-9, "settled state");
    }
}

#[test]
fn steady_state_of_integrator_is_undefined() {
    let err = FilterState::steady_state(&[1.0_f64, 0.0], &[1.0, -1.0], 1.0).unwrap_err();
    assert_eq!(err, FilterError::DivisionByZero);
}

// ═══════════════════════════════════════════════════════════════════
// IirFilter
// ═══════════════════════════════════════════════════════════════════

#[test]
fn iir_filter_tick_matches_lfilter() {
    let tf = butter_lowpass(4, 60.0_f64, 500.0).unwrap();
    let x = test_signal(100);
    let (reference, final_state) = lfilter(tf.b(), tf.a(), &x, None).unwrap();

    let mut f = IirFilter::new(tf);
    for (i, &v) in x.iter().enumerate() {
        assert_near(f.tick(v).unwrap(), reference[i], TOL, "tick");
    }
    assert_eq!(f.state(), final_state);
}

#[test]
fn iir_filter_process_and_inplace() {
    let tf = butter_lowpass(3, 20.0_f64, 200.0).unwrap();
    let x = test_signal(50);

    let mut f1 = IirFilter::new(tf.clone());
    let mut out = vec![0.0; 50];
    f1.process(&x, &mut out).unwrap();

    let mut f2 = IirFilter::new(tf);
    let mut data = x.clone();
    f2.process_inplace(&mut data).unwrap();

    for i in 0..50 {
        assert_near(out[i], data[i], TOL, "inplace");
    }
}

#[test]
fn iir_filter_reset() {
    let tf = butter_lowpass(2, 20.0_f64, 200.0).unwrap();
    let mut f = IirFilter::new(tf.clone());
    f.tick(1.0).unwrap();
    f.tick(0.5).unwrap();
    f.reset();
    let mut fresh = IirFilter::new(tf);
    assert_eq!(f.tick(1.0).unwrap(), fresh.tick(1.0).unwrap());
    assert_eq!(f.tick(0.5).unwrap(), fresh.tick(0.5).unwrap());
}

#[test]
fn iir_filter_resumes_from_state() {
    let tf = butter_lowpass(4, 25.0_f64, 500.0).unwrap();
    let x = test_signal(80);
    let (whole, _) = lfilter(tf.b(), tf.a(), &x, None).unwrap();
    let (_, s) = lfilter(tf.b(), tf.a(), &x[..30], None).unwrap();

    let mut f = IirFilter::with_state(tf.clone(), s).unwrap();
    for i in 30..80 {
        assert_near(f.tick(x[i]).unwrap(), whole[i], TOL, "resume");
    }

    let bad = IirFilter::with_state(tf, FilterState::zeros(2));
    assert_eq!(bad.unwrap_err(), FilterError::InvalidArgument(Argument::StateLength));
}

#[test]
fn iir_filter_reports_overflow() {
    let tf = TransferFunction::new(vec![1.0_f64, 0.0], vec![1.0, -2.0]).unwrap();
    let mut f = IirFilter::new(tf);
    assert_eq!(f.tick(f64::INFINITY).unwrap_err(), FilterError::NumericOverflow);
}

#[test]
fn iir_filter_reports_state_overflow() {
    // Finite output, but 10·x overflows the delay line.
    let tf = TransferFunction::new(vec![1.0_f64, 10.0], vec![1.0, 0.0]).unwrap();
    let mut f = IirFilter::new(tf.clone());
    assert_eq!(f.tick(1e308).unwrap_err(), FilterError::NumericOverflow);

    let mut g = IirFilter::new(tf);
    let mut data = [1.0, 1e308, 0.0];
    assert_eq!(g.process_inplace(&mut data).unwrap_err(), FilterError::NumericOverflow);
}
