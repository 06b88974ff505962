use serde::{Deserialize, Deserializer, Serialize};

// ============ Domain Record ============

/// Verification state of a domain.
///
/// Only ever moves from [`Unverified`](Self::Unverified) to
/// [`Verified`](Self::Verified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Ownership has not been confirmed yet.
    #[default]
    Unverified,
    /// Ownership has been confirmed.
    Verified,
}

impl DomainStatus {
    /// Wire representation (`"unverified"` / `"verified"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Verified => "verified",
        }
    }

    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

// Unknown status strings decode as `Unverified` instead of failing the whole list.
impl<'de> Deserialize<'de> for DomainStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("verified") => Self::Verified,
            _ => Self::Unverified,
        })
    }
}

/// A domain record as stored by the remote collection.
///
/// # Wire format
///
/// ```json
/// { "id": "1", "domain": "example.com", "isActive": true,
///   "status": "unverified", "createdDate": 1737998400 }
/// ```
///
/// Missing `isActive` decodes as `true`, missing `status` as `unverified`,
/// missing `createdDate` as `None`. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Identifier assigned by the remote store.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Target URL or hostname.
    pub domain: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub status: DomainStatus,
    /// Creation time, seconds since the Unix epoch.
    #[serde(
        default,
        deserialize_with = "de_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<i64>,
}

impl DomainRecord {
    /// Creation time used for ordering; a missing timestamp counts as 0.
    pub fn created_or_zero(&self) -> i64 {
        self.created_date.unwrap_or(0)
    }
}

fn default_active() -> bool {
    true
}

/// Accept both `"12"` and `12` as an id.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

/// Accept integers, floats and numeric strings; anything else is treated as absent.
fn de_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    #[allow(clippy::cast_possible_truncation)]
    let value = match raw {
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(value)
}

// ============ Requests ============

/// Input for creating a domain.
///
/// Only `domain` is required; the remaining fields are filled in by
/// [`NewDomain::into_payload`] when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDomain {
    pub domain: String,
    pub created_date: Option<i64>,
    pub status: Option<DomainStatus>,
    pub is_active: Option<bool>,
}

impl NewDomain {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Build the POST body, filling defaults.
    ///
    /// A missing (or zero) `created_date` becomes `now`, `status` defaults to
    /// `unverified`, `is_active` defaults to `true`.
    pub fn into_payload(self, now: i64) -> CreateDomainPayload {
        CreateDomainPayload {
            created_date: self.created_date.filter(|&t| t != 0).unwrap_or(now),
            domain: self.domain,
            status: self.status.unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Body sent with `POST /domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainPayload {
    pub created_date: i64,
    pub domain: String,
    pub status: DomainStatus,
    pub is_active: bool,
}

/// Partial update sent with `PUT /domain/{id}`.
///
/// Fields left as `None` are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<i64>,
}

impl UpdateDomainRequest {
    /// Whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.is_active.is_none()
            && self.status.is_none()
            && self.created_date.is_none()
    }
}
