use serde::{Deserialize, Serialize};

pub trait TextCodec<T> {
    fn encode(&self, value: &T) -> Result<String, String>;
    fn decode(&self, content: &str) -> Result<T, String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlCodec;

impl<T> TextCodec<T> for YamlCodec
where
    T: for<'de> Deserialize<'de> + Serialize,
{
    fn encode(&self, value: &T) -> Result<String, String> {
        serde_yaml_ng::to_string(value).map_err(|e| format!("Failed to encode YAML: {}", e))
    }

    fn decode(&self, content: &str) -> Result<T, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to decode YAML: {}", e))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl<T> TextCodec<T> for JsonCodec
where
    T: for<'de> Deserialize<'de> + Serialize,
{
    fn encode(&self, value: &T) -> Result<String, String> {
        serde_json::to_string(value).map_err(|e| format!("Failed to encode JSON: {}", e))
    }

    fn decode(&self, content: &str) -> Result<T, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to decode JSON: {}", e))
    }
}
