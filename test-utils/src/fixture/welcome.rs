use serde_json::{json, Map, Value};

/// A document that is not valid JSON.
pub const TRUNCATED_DOCUMENT: &str = r#"{ "1": { "enabled": true, "chan"#;

/// Valid JSON whose top level is not an object.
pub const WRONG_SHAPE_DOCUMENT: &str = r#"[1, 2, 3]"#;

/// A document whose key is not a guild ID.
pub const NON_NUMERIC_KEY_DOCUMENT: &str =
    r#"{ "general": { "enabled": true, "channel_id": null, "message": "Hi" } }"#;

/// A document written by an older version that omitted optional fields.
pub const PARTIAL_FIELDS_DOCUMENT: &str = r#"{ "5": { "channel_id": 77 } }"#;

/// Builder for one guild entry of a welcome document.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    guild_id: u64,
    enabled: bool,
    channel_id: Option<u64>,
    message: String,
}

/// Starts an entry for `guild_id` with the same defaults the bot uses.
pub fn entry(guild_id: u64) -> EntryBuilder {
    EntryBuilder {
        guild_id,
        enabled: true,
        channel_id: None,
        message: "Welcome {user} to {guild}!".to_string(),
    }
}

impl EntryBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn into_pair(self) -> (String, Value) {
        (
            self.guild_id.to_string(),
            json!({
                "enabled": self.enabled,
                "channel_id": self.channel_id,
                "message": self.message,
            }),
        )
    }
}

/// Builds a welcome document from entries as a JSON value.
pub fn document_value(entries: &[EntryBuilder]) -> Value {
    let map: Map<String, Value> = entries.iter().cloned().map(EntryBuilder::into_pair).collect();
    Value::Object(map)
}

/// Builds a welcome document from entries as raw bytes.
pub fn document(entries: &[EntryBuilder]) -> Vec<u8> {
    serde_json::to_vec_pretty(&document_value(entries)).expect("fixture document is serializable")
}

/// A document holding a single channel-mode guild.
pub fn single_guild_document() -> Vec<u8> {
    document(&[entry(1).channel_id(42).message("Hi {user}")])
}
