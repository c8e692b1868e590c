use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Completed,
    Busy,
    NoAnswer,
    Failed,
}

impl CallStatus {
    /// Wire form, also used verbatim as the status distribution label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Completed => "completed",
            CallStatus::Busy => "busy",
            CallStatus::NoAnswer => "no-answer",
            CallStatus::Failed => "failed",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// yes/no answer captured by the voice agent.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn is_yes(&self) -> bool {
        matches!(self, Flag::Yes)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchemeLevel {
    First,
    Second,
    Third,
}

impl SchemeLevel {
    /// "Loan First", "Loan Second", ...
    pub fn label(&self) -> &'static str {
        match self {
            SchemeLevel::First => "Loan First",
            SchemeLevel::Second => "Loan Second",
            SchemeLevel::Third => "Loan Third",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    #[default]
    Outbound,
    Inbound,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub call_id: u64,
    pub call_date: String,
    pub call_status: CallStatus,

    // Only populated when the call got far enough for the agent to ask.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub awareness_flag: Option<Flag>,
    #[serde(default)]
    pub final_interest_flag: Option<Flag>,
    #[serde(default)]
    pub user_scheme_level: Option<SchemeLevel>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub interaction_count: u32,
    #[serde(default)]
    pub call_direction: CallDirection,
}

impl CallRecord {
    pub fn new(call_id: u64, call_date: impl Into<String>, call_status: CallStatus) -> Self {
        Self {
            call_id,
            call_date: call_date.into(),
            call_status,
            sentiment: None,
            awareness_flag: None,
            final_interest_flag: None,
            user_scheme_level: None,
            interaction_count: 0,
            call_direction: CallDirection::default(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.call_status == CallStatus::Completed
    }
}

// Exported dialer sheets carry counts as integers, floats ("4.0"), numeric
// strings, blanks or null. Anything that is not a non-negative whole number
// counts as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let count = match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| n.as_f64().and_then(whole_count)),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole_count),
        _ => None,
    };
    Ok(count.unwrap_or(0))
}

fn whole_count(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)
    {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "call_id": 17,
            "call_date": "12/5/25",
            "call_status": "completed",
            "sentiment": "Positive",
            "awareness_flag": "yes",
            "final_interest_flag": "no",
            "user_scheme_level": "second",
            "interaction_count": 6,
            "call_direction": "outbound"
        }"#;
        let record: CallRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.call_id, 17);
        assert!(record.is_completed());
        assert_eq!(record.sentiment, Some(Sentiment::Positive));
        assert_eq!(record.awareness_flag, Some(Flag::Yes));
        assert_eq!(record.final_interest_flag, Some(Flag::No));
        assert_eq!(record.user_scheme_level, Some(SchemeLevel::Second));
        assert_eq!(record.interaction_count, 6);
    }

    #[test]
    fn test_deserialize_failed_call_with_nulls() {
        let json = r#"{
            "call_id": 3,
            "call_date": "12/5/25",
            "call_status": "no-answer",
            "sentiment": null,
            "awareness_flag": null,
            "final_interest_flag": null,
            "user_scheme_level": null,
            "interaction_count": null,
            "call_direction": "inbound"
        }"#;
        let record: CallRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.call_status, CallStatus::NoAnswer);
        assert_eq!(record.sentiment, None);
        assert_eq!(record.interaction_count, 0);
        assert_eq!(record.call_direction, CallDirection::Inbound);
    }

    #[test]
    fn test_lenient_interaction_count() {
        let parse = |count: &str| -> u32 {
            let json = format!(
                r#"{{"call_id": 1, "call_date": "12/5/25", "call_status": "completed", "interaction_count": {}}}"#,
                count
            );
            serde_json::from_str::<CallRecord>(&json).unwrap().interaction_count
        };
        assert_eq!(parse("4"), 4);
        assert_eq!(parse(r#""3""#), 3);
        assert_eq!(parse(r#""n/a""#), 0);
        assert_eq!(parse(r#""""#), 0);
        assert_eq!(parse("-2"), 0);
        assert_eq!(parse("2.5"), 0);
        assert_eq!(parse(r#""2.5""#), 0);
    }

    #[test]
    fn test_whole_float_interaction_count() {
        let parse = |count: &str| -> u32 {
            let json = format!(
                r#"{{"call_id": 1, "call_date": "12/5/25", "call_status": "completed", "interaction_count": {}}}"#,
                count
            );
            serde_json::from_str::<CallRecord>(&json).unwrap().interaction_count
        };
        assert_eq!(parse("4.0"), 4);
        assert_eq!(parse(r#""4.0""#), 4);
        assert_eq!(parse(r#"" 6.0 ""#), 6);
        assert_eq!(parse("0.0"), 0);
        assert_eq!(parse("-3.0"), 0);
        assert_eq!(parse(r#""inf""#), 0);
        assert_eq!(parse(r#""NaN""#), 0);
        assert_eq!(parse("1e12"), 0);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"call_id": 9, "call_date": "12/2/25", "call_status": "busy"}"#;
        let record: CallRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.interaction_count, 0);
        assert_eq!(record.call_direction, CallDirection::Outbound);
        assert!(record.user_scheme_level.is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"call_id": 9, "call_date": "12/2/25", "call_status": "voicemail"}"#;
        assert!(serde_json::from_str::<CallRecord>(json).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CallStatus::NoAnswer.as_str(), "no-answer");
        assert_eq!(SchemeLevel::Third.label(), "Loan Third");
        assert_eq!(Sentiment::Neutral.label(), "Neutral");
    }
}
