use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single day's journal entry as stored by the API.
///
/// `id` is server-assigned and stable. `ai_summary` and `habit_logs` are
/// nullable on the wire and decode to empty values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    pub entry_date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub journal_content: String,
    #[serde(default)]
    pub mood_score: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ai_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub habit_logs: Vec<HabitLog>,
}

impl JournalEntry {
    /// True if a log with exactly this habit name is attached.
    ///
    /// Only presence is checked, `completed` is not consulted.
    pub fn has_habit(&self, habit_name: &str) -> bool {
        self.habit_logs.iter().any(|log| log.habit_name == habit_name)
    }

    /// Habit names in the order the server returned them.
    pub fn habit_names(&self) -> Vec<String> {
        self.habit_logs
            .iter()
            .map(|log| log.habit_name.clone())
            .collect()
    }
}

/// One habit attached to an entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitLog {
    /// The API emits numeric ids; older builds emitted strings. Both decode here.
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    pub habit_name: String,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

/// Body of `POST /entries` and `PUT /entries/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryRequest {
    pub journal: String,
    pub habits: Vec<String>,
}

fn default_completed() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_decodes_camel_case_payload() {
        let json = r#"{
            "id": 7,
            "entryDate": "2026-03-14",
            "journalContent": "Quiet day",
            "moodScore": 6,
            "aiSummary": "Calm.",
            "habitLogs": [{"id": 3, "habitName": "📚 Read", "completed": true}]
        }"#;

        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.entry_date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(entry.mood_score, 6);
        assert_eq!(entry.habit_logs[0].id, "3");
        assert!(entry.has_habit("📚 Read"));
        assert!(!entry.has_habit("🏃 Run"));
    }

    #[test]
    fn test_entry_tolerates_null_and_missing_fields() {
        let json = r#"{"id": 1, "entryDate": "2026-01-02", "journalContent": "x", "moodScore": 5, "aiSummary": null, "habitLogs": null}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.ai_summary.is_empty());
        assert!(entry.habit_logs.is_empty());

        let json = r#"{"id": 2, "entryDate": "2026-01-03", "journalContent": "y", "moodScore": 4}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.habit_logs.is_empty());
    }

    #[test]
    fn test_habit_log_accepts_string_id_and_defaults_completed() {
        let log: HabitLog = serde_json::from_str(r#"{"id": "h-1", "habitName": "💧 Water"}"#).unwrap();
        assert_eq!(log.id, "h-1");
        assert!(log.completed);
    }

    #[test]
    fn test_entry_request_wire_keys() {
        let request = EntryRequest {
            journal: "hello".to_string(),
            habits: vec!["🧘 Meditate".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "journal": "hello", "habits": ["🧘 Meditate"] }));
    }
}
