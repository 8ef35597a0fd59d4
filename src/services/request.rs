//! Request building blocks shared by the API client and its transports.

use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Body of an outgoing request. The caller picks the variant; nothing is
/// inferred from the runtime shape of a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,

    /// Serialized as JSON with `Content-Type: application/json`.
    Json(Value),

    /// Sent as `multipart/form-data`; the transport sets the boundary header.
    Multipart(MultipartBody),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, AppError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
        mime: Option<String>,
    },
}

/// MIME type of an image file, by extension.
pub fn image_mime(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Multipart payload for file uploads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    parts: Vec<MultipartPart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
            mime: None,
        });
        self
    }

    pub fn file_with_mime(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime: impl Into<String>,
    ) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
            mime: Some(mime.into()),
        });
        self
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Convert into a reqwest form.
    pub fn into_form(self) -> Result<Form, AppError> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part {
                MultipartPart::Text { name, value } => form.text(name, value),
                MultipartPart::File {
                    name,
                    file_name,
                    bytes,
                    mime,
                } => {
                    let mut file_part = Part::bytes(bytes).file_name(file_name);
                    if let Some(mime) = mime {
                        file_part = file_part.mime_str(&mime).map_err(|e| {
                            AppError::invalid_input_field(format!("Invalid MIME type: {}", e), "mime")
                        })?;
                    }
                    form.part(name, file_part)
                }
            };
        }
        Ok(form)
    }
}

/// Ordered flat query parameters. Entries without a value are dropped when
/// the query string is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries.push((key.into(), Some(value.to_string())));
        self
    }

    /// Append a parameter that may be absent.
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.entries.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// Build parameters from a serializable struct or map, in field order.
    /// `null` fields are skipped; nested values are rendered as JSON.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, AppError> {
        let object = match serde_json::to_value(value)? {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::new()),
            _ => {
                return Err(AppError::invalid_input(
                    "Query parameters must serialize to an object",
                ))
            }
        };

        let entries = object
            .into_iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                };
                (key, rendered)
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }

    /// Render as `a=1&c=x`, percent-encoding keys and values.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                value.as_ref().map(|v| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(v))
                })
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the rendered query string to an endpoint.
    pub fn append_to(&self, endpoint: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            endpoint.to_string()
        } else if endpoint.contains('?') {
            format!("{}&{}", endpoint, query)
        } else {
            format!("{}?{}", endpoint, query)
        }
    }
}

/// A fully prepared request handed to a transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,

    /// Endpoint relative to the plugin prefix, without a leading slash,
    /// possibly carrying a query string.
    pub endpoint: String,

    pub body: RequestBody,

    /// Extra headers supplied by the caller.
    pub headers: HeaderMap,

    /// API key to attach, if one is set.
    pub credential: Option<String>,
}

impl ApiRequest {
    /// Endpoint without its query string.
    pub fn path(&self) -> &str {
        self.endpoint
            .split_once('?')
            .map_or(self.endpoint.as_str(), |(path, _)| path)
    }
}

/// Raw response as seen by a transport: status plus the body read once as text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }
}

/// Strip one leading slash so `"/emoji/list"` and `"emoji/list"` are equivalent.
pub fn clean_endpoint(endpoint: &str) -> &str {
    endpoint.strip_prefix('/').unwrap_or(endpoint)
}
