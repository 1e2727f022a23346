//! Data object references and resolution.
//!
//! Every cross-object link in RESQML is a [`DataObjectReference`]: a content
//! type plus a UUID (or URI) and optional descriptive fields. This crate never
//! follows references on its own; consumers plug in a [`ReferenceResolver`].
//! References that cannot be resolved are kept verbatim.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;
use uuid::Uuid;

/// Identity of a referenced object.
///
/// The text a key was parsed from is kept and written back unchanged. Two UUID
/// keys are equal when they name the same UUID, whatever their spelling.
#[derive(Debug, Clone)]
pub enum ObjectKey {
    /// UUID identity (RESQML 2.0 `UUID` element).
    Uuid {
        /// Parsed value.
        id: Uuid,
        /// Text as read.
        raw: String,
    },
    /// URI identity for locators that are not bare UUIDs.
    Uri(String),
}

impl ObjectKey {
    /// Parses a key, preferring the UUID form.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match Uuid::parse_str(value.trim()) {
            Ok(id) => Self::Uuid {
                id,
                raw: value.to_string(),
            },
            Err(_) => Self::Uri(value.to_string()),
        }
    }

    /// Returns the UUID, if this key is one.
    #[must_use]
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid { id, .. } => Some(id),
            Self::Uri(_) => None,
        }
    }

    /// Returns the key text as read.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uuid { raw, .. } => raw,
            Self::Uri(uri) => uri,
        }
    }
}

impl PartialEq for ObjectKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Uuid { id: a, .. }, Self::Uuid { id: b, .. }) => a == b,
            (Self::Uri(a), Self::Uri(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ObjectKey {}

impl Hash for ObjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Uuid { id, .. } => {
                0u8.hash(state);
                id.hash(state);
            }
            Self::Uri(uri) => {
                1u8.hash(state);
                uri.hash(state);
            }
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Uuid> for ObjectKey {
    fn from(id: Uuid) -> Self {
        Self::Uuid {
            id,
            raw: id.hyphenated().to_string(),
        }
    }
}

/// Parsed EnergyML content type.
///
/// ```text
/// application/x-resqml+xml;version=2.0;type=obj_TriangulatedSetRepresentation
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType {
    raw: String,
}

impl ContentType {
    /// Wraps a raw content type string, preserving it verbatim.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Builds the canonical RESQML 2.0 content type for an object type.
    #[must_use]
    pub fn resqml(object_type: &str) -> Self {
        Self::new(format!(
            "application/x-resqml+xml;version=2.0;type={object_type}"
        ))
    }

    /// Builds the canonical common (eml) 2.0 content type for an object type.
    #[must_use]
    pub fn eml(object_type: &str) -> Self {
        Self::new(format!("application/x-eml+xml;version=2.0;type={object_type}"))
    }

    /// Returns the raw string exactly as parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the media type before the first `;`.
    #[must_use]
    pub fn media_type(&self) -> &str {
        self.raw.split(';').next().unwrap_or_default().trim()
    }

    /// Returns a `;`-separated parameter by name (case-insensitive key).
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.raw.split(';').skip(1).find_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }

    /// Returns the `type=` parameter, e.g. `obj_HdfProxy`.
    #[must_use]
    pub fn object_type(&self) -> Option<&str> {
        self.parameter("type")
    }

    /// Returns the `version=` parameter.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.parameter("version")
    }

    /// Returns true if both content types name the same object type.
    ///
    /// Namespace qualifiers such as `resqml20.` are ignored, and a content type
    /// without a `type=` parameter matches anything.
    #[must_use]
    pub fn targets(&self, object_type: &str) -> bool {
        self.object_type()
            .is_none_or(|declared| unqualified(declared) == unqualified(object_type))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn unqualified(object_type: &str) -> &str {
    object_type.rsplit('.').next().unwrap_or(object_type)
}

/// Typed foreign key to another data object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataObjectReference {
    /// Declared content type of the target.
    pub content_type: ContentType,
    /// Identity of the target.
    pub key: ObjectKey,
    /// Human-readable title of the target.
    pub title: Option<String>,
    /// Authority that issued the UUID.
    pub uuid_authority: Option<String>,
    /// Version of the target object.
    pub version_string: Option<String>,
}

impl DataObjectReference {
    /// Creates a reference with no optional fields.
    #[must_use]
    pub fn new(content_type: ContentType, key: impl Into<ObjectKey>) -> Self {
        Self {
            content_type,
            key: key.into(),
            title: None,
            uuid_authority: None,
            version_string: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version_string = Some(version.into());
        self
    }

    /// Returns the declared target object type.
    #[must_use]
    pub fn object_type(&self) -> Option<&str> {
        self.content_type.object_type()
    }
}

/// Why a reference did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No object with that key is known.
    Missing,
    /// An object exists but its type differs from the declared content type.
    TypeMismatch {
        /// Object type actually registered under the key.
        registered: String,
    },
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("no such object"),
            Self::TypeMismatch { registered } => {
                write!(f, "registered object is of type {registered}")
            }
        }
    }
}

/// Failure to resolve a [`DataObjectReference`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reference to {key} ({content_type}) not found: {reason}")]
pub struct ReferenceNotFound {
    /// Key of the unresolved reference.
    pub key: ObjectKey,
    /// Content type declared by the reference.
    pub content_type: ContentType,
    /// Reason for the failure.
    pub reason: NotFoundReason,
}

impl ReferenceNotFound {
    /// Creates a not-found error for a reference.
    #[must_use]
    pub fn new(reference: &DataObjectReference, reason: NotFoundReason) -> Self {
        Self {
            key: reference.key.clone(),
            content_type: reference.content_type.clone(),
            reason,
        }
    }
}

/// Capability to follow references, supplied by the consuming application.
pub trait ReferenceResolver {
    /// Type of the resolved objects.
    type Object;

    /// Resolves a reference.
    ///
    /// # Errors
    /// Returns [`ReferenceNotFound`] if the target is unknown or of the wrong type.
    fn resolve(&self, reference: &DataObjectReference) -> Result<&Self::Object, ReferenceNotFound>;
}

#[derive(Debug, Clone)]
struct Entry<T> {
    object_type: String,
    object: T,
}

/// In-memory [`ReferenceResolver`] keyed by object identity.
#[derive(Debug, Clone)]
pub struct ObjectRegistry<T> {
    objects: HashMap<ObjectKey, Entry<T>>,
}

impl<T> ObjectRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Registers an object, returning any object previously stored under the key.
    pub fn register(
        &mut self,
        key: impl Into<ObjectKey>,
        object_type: impl Into<String>,
        object: T,
    ) -> Option<T> {
        let key = key.into();
        let object_type = object_type.into();
        tracing::trace!("registering {} as {}", key, object_type);
        self.objects
            .insert(key, Entry { object_type, object })
            .map(|previous| previous.object)
    }

    /// Removes an object.
    pub fn remove(&mut self, key: &ObjectKey) -> Option<T> {
        self.objects.remove(key).map(|entry| entry.object)
    }

    /// Returns true if an object is registered under the key.
    #[must_use]
    pub fn contains(&self, key: &ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Returns the number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T> Default for ObjectRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReferenceResolver for ObjectRegistry<T> {
    type Object = T;

    fn resolve(&self, reference: &DataObjectReference) -> Result<&T, ReferenceNotFound> {
        let entry = self.objects.get(&reference.key).ok_or_else(|| {
            tracing::trace!("unresolved reference {}", reference.key);
            ReferenceNotFound::new(reference, NotFoundReason::Missing)
        })?;

        if !reference.content_type.targets(&entry.object_type) {
            return Err(ReferenceNotFound::new(
                reference,
                NotFoundReason::TypeMismatch {
                    registered: entry.object_type.clone(),
                },
            ));
        }

        Ok(&entry.object)
    }
}
