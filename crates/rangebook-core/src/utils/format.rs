use crate::drills::DrillParam;

/// Format a distance in meters for display
pub fn format_distance_m(meters: f64) -> String {
    if meters.fract() == 0.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.1} m", meters)
    }
}

/// Format a duration in seconds, switching to M:SS past a minute
pub fn format_seconds(seconds: f64) -> String {
    if seconds >= 60.0 {
        let total = seconds.round() as u64;
        format!("{}:{:02}", total / 60, total % 60)
    } else if seconds.fract() == 0.0 {
        format!("{:.0} s", seconds)
    } else {
        format!("{:.1} s", seconds)
    }
}

/// Format a 0-100 score or hit rate as a percentage
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Format an optional string, returning a default if None
pub fn format_optional(value: &Option<String>, default: &str) -> String {
    value.as_deref().unwrap_or(default).to_string()
}

/// Format a drill parameter value with its unit
pub fn format_param_value(param: DrillParam, value: f64) -> String {
    match param {
        DrillParam::Distance => format_distance_m(value),
        DrillParam::TimeLimit => format_seconds(value),
        DrillParam::MinScore => format_percent(value),
        DrillParam::Shots | DrillParam::Strings => format!("{:.0} {}", value, param.unit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance_m(100.0), "100 m");
        assert_eq!(format_distance_m(12.5), "12.5 m");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(20.0), "20 s");
        assert_eq!(format_seconds(12.5), "12.5 s");
        assert_eq!(format_seconds(300.0), "5:00"); // Qualification par time
        assert_eq!(format_seconds(90.0), "1:30");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(70.0), "70%");
        assert_eq!(format_percent(62.5), "62.5%");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(&Some("Alpha".to_string()), "-"), "Alpha");
        assert_eq!(format_optional(&None, "-"), "-");
    }

    #[test]
    fn test_format_param_value() {
        assert_eq!(format_param_value(DrillParam::Distance, 150.0), "150 m");
        assert_eq!(format_param_value(DrillParam::Shots, 5.0), "5 rounds");
        assert_eq!(format_param_value(DrillParam::TimeLimit, 20.0), "20 s");
        assert_eq!(format_param_value(DrillParam::Strings, 3.0), "3 strings");
        assert_eq!(format_param_value(DrillParam::MinScore, 70.0), "70%");
    }
}
