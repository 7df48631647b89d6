use std::fmt;

/// A validated 5-field cron expression (minute, hour, day-of-month,
/// month, day-of-week), as accepted by CI `schedule:` triggers.
///
/// Only the subset the pipeline uses is supported: `*` or a single
/// numeric value per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    minute: Field,
    hour: Field,
    day_of_month: Field,
    month: Field,
    day_of_week: Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Any,
    Exact(u8),
}

impl Field {
    fn parse(raw: &str, min: u8, max: u8, label: &str) -> Result<Self, String> {
        if raw == "*" {
            return Ok(Self::Any);
        }
        let value: u8 = raw
            .parse()
            .map_err(|_| format!("{label} field '{raw}' is not a number or '*'"))?;
        if value < min || value > max {
            return Err(format!("{label} field {value} out of range {min}-{max}"));
        }
        Ok(Self::Exact(value))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "*"),
            Self::Exact(v) => write!(f, "{v}"),
        }
    }
}

impl Schedule {
    /// Parse and validate a cron expression.
    pub fn parse(expr: &str) -> crate::Result<Self> {
        let invalid = |reason: String| crate::Error::InvalidSchedule {
            expr: expr.to_owned(),
            reason,
        };

        let fields: Vec<&str> = expr.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(invalid(format!("expected 5 fields, got {}", fields.len())));
        }

        Ok(Self {
            minute: Field::parse(fields[0], 0, 59, "minute").map_err(invalid)?,
            hour: Field::parse(fields[1], 0, 23, "hour").map_err(invalid)?,
            day_of_month: Field::parse(fields[2], 1, 31, "day-of-month").map_err(invalid)?,
            month: Field::parse(fields[3], 1, 12, "month").map_err(invalid)?,
            day_of_week: Field::parse(fields[4], 0, 7, "day-of-week").map_err(invalid)?,
        })
    }

    /// The pipeline default: every Monday at 00:00.
    pub fn weekly() -> Self {
        Self {
            minute: Field::Exact(0),
            hour: Field::Exact(0),
            day_of_month: Field::Any,
            month: Field::Any,
            day_of_week: Field::Exact(1),
        }
    }

    /// Render the expression back out for the workflow trigger.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }

    /// Human-readable summary for the generated workflow comment.
    pub fn describe(&self) -> String {
        if let (Field::Exact(m), Field::Exact(h), Field::Any, Field::Any, Field::Exact(d)) = (
            self.minute,
            self.hour,
            self.day_of_month,
            self.month,
            self.day_of_week,
        ) {
            return format!("every {} at {h:02}:{m:02}", weekday_name(d));
        }
        format!("on cron schedule '{}'", self.expression())
    }
}

fn weekday_name(day: u8) -> &'static str {
    match day {
        0 | 7 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        _ => "Saturday",
    }
}
