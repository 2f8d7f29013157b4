use super::*;


#[test]
fn integer_arithmetic_stays_integral() {
    assert_eq!(Integer(2).checked_add(Integer(3)), Some(Integer(5)));
    assert_eq!(Integer(2).checked_sub(Integer(3)), Some(Integer(-1)));
    assert_eq!(Integer(4).checked_mul(Integer(3)), Some(Integer(12)));
}

#[test]
fn float_promotes() {
    assert_eq!(Integer(1).checked_add(Float(0.5)), Some(Float(1.5)));
    assert_eq!(Float(1.5).checked_mul(Integer(2)), Some(Float(3.0)));
    assert_eq!(Integer(1).div(Integer(2)), Float(0.5));
}

#[test]
fn overflow_is_none() {
    assert_eq!(Integer(i64::MAX).checked_add(Integer(1)), None);
    assert_eq!(Integer(i64::MIN).checked_neg(), None);
    assert_eq!(Integer(i64::MAX).checked_mul(Integer(2)), None);
}

#[test]
fn from_str() {
    assert_eq!("12".parse::<Number>(), Ok(Integer(12)));
    assert_eq!("-4".parse::<Number>(), Ok(Integer(-4)));
    assert_eq!("1.".parse::<Number>(), Ok(Float(1.0)));
    assert_eq!("-4.5".parse::<Number>(), Ok(Float(-4.5)));
    assert!("1.2.3".parse::<Number>().is_err());
    assert!("99999999999999999999".parse::<Number>().is_err());
}

#[test]
fn display_keeps_float_marker() {
    assert_eq!(Integer(3).to_string(), "3");
    assert_eq!(Float(3.0).to_string(), "3.0");
    assert_eq!(Float(4.6).to_string(), "4.6");
    assert_eq!(Float(-0.25).to_string(), "-0.25");
    assert_eq!(Float(1e16).to_string(), "10000000000000000.0");
    assert_eq!(Float(1e20).to_string(), "100000000000000000000.0");
    assert_eq!(Float(-1e20).to_string(), "-100000000000000000000.0");
}

#[test]
fn large_floats_reparse() {
    for src in ["10000000000000000.0", "100000000000000000000.0"].iter() {
        let num: Number = src.parse().unwrap();
        assert_eq!(num.to_string(), *src);
        assert_eq!(num.to_string().parse::<Number>().unwrap(), num);
    }
}
