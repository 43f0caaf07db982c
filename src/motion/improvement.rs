pub fn improvement(before: f64, after: f64, lower_is_better: bool) -> Option<f64> {
    if before == 0.0 || !before.is_finite() || !after.is_finite() {
        return None;
    }
    let delta = if lower_is_better {
        before - after
    } else {
        after - before
    };
    Some(delta / before * 100.0)
}

pub fn format_improvement(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_is_better() {
        let v = improvement(72.0, 91.0, false).unwrap();
        assert_eq!(format_improvement(Some(v)), "26.4%");
    }

    #[test]
    fn lower_is_better_flips_sign() {
        let v = improvement(8.5, 3.2, true).unwrap();
        assert_eq!(format_improvement(Some(v)), "62.4%");
        let worse = improvement(8.5, 10.0, true).unwrap();
        assert!(worse < 0.0);
    }

    #[test]
    fn regression_is_negative() {
        let v = improvement(100.0, 80.0, false).unwrap();
        assert_eq!(format_improvement(Some(v)), "-20.0%");
    }

    #[test]
    fn zero_baseline_has_no_value() {
        assert_eq!(improvement(0.0, 10.0, false), None);
        assert_eq!(format_improvement(None), "n/a");
    }
}
