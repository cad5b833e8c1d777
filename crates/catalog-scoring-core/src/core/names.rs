// crates/catalog-scoring-core/src/core/names.rs
// ============================================================================
// Module: Catalog Resource Names
// Description: Typed hierarchical resource names and wildcard patterns.
// Purpose: Parse catalog addresses into a closed sum type over resource kinds.
// Dependencies: crate::core::errors, serde
// ============================================================================

//! ## Overview
//! Catalog resources form a fixed hierarchy rooted at a project:
//!
//! | kind       | form                                                         |
//! |------------|--------------------------------------------------------------|
//! | Artifact   | `<project|api|version|spec|deployment>/artifacts/{artifact}` |
//! | Spec       | `projects/{p}/apis/{a}/versions/{v}/specs/{s}[@{revision}]`  |
//! | Deployment | `projects/{p}/apis/{a}/deployments/{d}[@{revision}]`         |
//! | Version    | `projects/{p}/apis/{a}/versions/{v}`                         |
//! | Api        | `projects/{p}/apis/{a}`                                      |
//! | Project    | `projects/{p}`                                               |
//!
//! `projects/{p}` may be followed by `locations/global`. Names and patterns
//! share [`Resource`], parameterized by the segment type: concrete names hold
//! [`Identifier`]s, patterns hold [`Segment`]s that may also be the wildcard
//! `-` or a `$resource.<level>` back-reference.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::core::errors::ParseError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Wildcard segment matching exactly one identifier.
pub const WILDCARD: &str = "-";
/// Prefix shared by all back-reference tokens.
pub const REFERENCE_PREFIX: &str = "$resource";
/// The only supported location.
pub const GLOBAL_LOCATION: &str = "global";
/// Separator between a spec or deployment identifier and its revision.
const REVISION_SEPARATOR: char = '@';

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Concrete identifier for a single hierarchy level.
///
/// # Invariants
/// - Non-empty ASCII letters, digits, `-` and `_`.
/// - Never the bare wildcard `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Parses an identifier token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidIdentifier`] when the token violates the grammar.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if value != WILDCARD && is_identifier_token(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::InvalidIdentifier {
                value: value.to_string(),
            })
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Returns true when `value` matches the identifier grammar.
fn is_identifier_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

// ============================================================================
// SECTION: Back-References
// ============================================================================

/// Level named by a `$resource.<level>` back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceLevel {
    /// `$resource.api`.
    Api,
    /// `$resource.version`.
    Version,
    /// `$resource.spec`.
    Spec,
    /// `$resource.artifact`.
    Artifact,
    /// No reference present.
    Default,
}

impl ReferenceLevel {
    /// Returns the stable label for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Version => "version",
            Self::Spec => "spec",
            Self::Artifact => "artifact",
            Self::Default => "default",
        }
    }

    /// Returns the resource kind a reference resolves to, or `None` for `Default`.
    #[must_use]
    pub const fn kind(self) -> Option<ResourceKind> {
        match self {
            Self::Api => Some(ResourceKind::Api),
            Self::Version => Some(ResourceKind::Version),
            Self::Spec => Some(ResourceKind::Spec),
            Self::Artifact => Some(ResourceKind::Artifact),
            Self::Default => None,
        }
    }

    /// Parses a full `$resource.<level>` token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidReference`] for a malformed or unknown level.
    pub fn from_token(token: &str) -> Result<Self, ParseError> {
        let level = token
            .strip_prefix(REFERENCE_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|suffix| match suffix {
                "api" => Some(Self::Api),
                "version" => Some(Self::Version),
                "spec" => Some(Self::Spec),
                "artifact" => Some(Self::Artifact),
                _ => None,
            });
        level.ok_or_else(|| ParseError::InvalidReference {
            token: token.to_string(),
        })
    }
}

impl fmt::Display for ReferenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Pattern Segments
// ============================================================================

/// One identifier slot of a resource pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A concrete identifier that must match exactly.
    Literal(Identifier),
    /// `-`, matching any single identifier.
    Wildcard,
    /// `$resource.<level>`, resolved from an associated target.
    Reference(ReferenceLevel),
}

impl Segment {
    /// Parses a pattern slot.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the slot is neither a wildcard, a valid
    /// back-reference, nor a valid identifier.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if value == WILDCARD {
            Ok(Self::Wildcard)
        } else if value.starts_with(REFERENCE_PREFIX) {
            ReferenceLevel::from_token(value).map(Self::Reference)
        } else {
            Identifier::parse(value).map(Self::Literal)
        }
    }

    /// Returns true when this slot accepts `identifier`.
    ///
    /// Back-references never match: they must be substituted before matching.
    #[must_use]
    pub fn matches(&self, identifier: &Identifier) -> bool {
        match self {
            Self::Literal(literal) => literal == identifier,
            Self::Wildcard => true,
            Self::Reference(_) => false,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(identifier) => identifier.fmt(f),
            Self::Wildcard => f.write_str(WILDCARD),
            Self::Reference(level) => write!(f, "{REFERENCE_PREFIX}.{level}"),
        }
    }
}

/// Token type that can fill an identifier slot of a [`Resource`].
pub trait NameSegment: Clone + PartialEq + fmt::Display {
    /// Human label used in parse errors.
    const SUBJECT: &'static str;

    /// Parses one slot.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the token is not valid for this segment type.
    fn parse_segment(value: &str) -> Result<Self, ParseError>;
}

impl NameSegment for Identifier {
    const SUBJECT: &'static str = "resource name";

    fn parse_segment(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl NameSegment for Segment {
    const SUBJECT: &'static str = "resource pattern";

    fn parse_segment(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

// ============================================================================
// SECTION: Resource Kinds
// ============================================================================

/// Kind of catalog resource named by a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Top-level project.
    Project,
    /// API within a project.
    Api,
    /// Version within an API.
    Version,
    /// Spec within a version.
    Spec,
    /// Deployment within an API.
    Deployment,
    /// Artifact attached to any other kind.
    Artifact,
}

impl ResourceKind {
    /// Returns the stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Api => "api",
            Self::Version => "version",
            Self::Spec => "spec",
            Self::Deployment => "deployment",
            Self::Artifact => "artifact",
        }
    }

    /// Returns the collection keyword that introduces this kind.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::Api => "apis",
            Self::Version => "versions",
            Self::Spec => "specs",
            Self::Deployment => "deployments",
            Self::Artifact => "artifacts",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Resources
// ============================================================================

/// A catalog address, generic over the token filling each slot.
///
/// # Invariants
/// - `Artifact::parent` is never itself an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource<S> {
    /// `projects/{project}`.
    Project {
        /// Project slot.
        project: S,
    },
    /// `projects/{project}/apis/{api}`.
    Api {
        /// Project slot.
        project: S,
        /// API slot.
        api: S,
    },
    /// `projects/{project}/apis/{api}/versions/{version}`.
    Version {
        /// Project slot.
        project: S,
        /// API slot.
        api: S,
        /// Version slot.
        version: S,
    },
    /// `projects/{project}/apis/{api}/versions/{version}/specs/{spec}[@{revision}]`.
    Spec {
        /// Project slot.
        project: S,
        /// API slot.
        api: S,
        /// Version slot.
        version: S,
        /// Spec slot.
        spec: S,
        /// Optional revision slot.
        revision: Option<S>,
    },
    /// `projects/{project}/apis/{api}/deployments/{deployment}[@{revision}]`.
    Deployment {
        /// Project slot.
        project: S,
        /// API slot.
        api: S,
        /// Deployment slot.
        deployment: S,
        /// Optional revision slot.
        revision: Option<S>,
    },
    /// `{parent}/artifacts/{artifact}`.
    Artifact {
        /// Resource the artifact is attached to.
        parent: Box<Self>,
        /// Artifact slot.
        artifact: S,
    },
}

/// Concrete, fully-identified catalog address.
pub type ResourceName = Resource<Identifier>;
/// Template describing a set of catalog addresses.
pub type ResourcePattern = Resource<Segment>;

impl<S> Resource<S> {
    /// Returns the kind of resource this address names.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Project {
                ..
            } => ResourceKind::Project,
            Self::Api {
                ..
            } => ResourceKind::Api,
            Self::Version {
                ..
            } => ResourceKind::Version,
            Self::Spec {
                ..
            } => ResourceKind::Spec,
            Self::Deployment {
                ..
            } => ResourceKind::Deployment,
            Self::Artifact {
                ..
            } => ResourceKind::Artifact,
        }
    }

    /// Returns the project slot.
    #[must_use]
    pub fn project(&self) -> &S {
        match self {
            Self::Project {
                project,
            }
            | Self::Api {
                project, ..
            }
            | Self::Version {
                project, ..
            }
            | Self::Spec {
                project, ..
            }
            | Self::Deployment {
                project, ..
            } => project,
            Self::Artifact {
                parent, ..
            } => parent.project(),
        }
    }

    /// Returns the API slot when this address is at or below an API.
    #[must_use]
    pub fn api(&self) -> Option<&S> {
        match self {
            Self::Project {
                ..
            } => None,
            Self::Api {
                api, ..
            }
            | Self::Version {
                api, ..
            }
            | Self::Spec {
                api, ..
            }
            | Self::Deployment {
                api, ..
            } => Some(api),
            Self::Artifact {
                parent, ..
            } => parent.api(),
        }
    }

    /// Returns the version slot when this address is at or below a version.
    #[must_use]
    pub fn version(&self) -> Option<&S> {
        match self {
            Self::Version {
                version, ..
            }
            | Self::Spec {
                version, ..
            } => Some(version),
            Self::Project {
                ..
            }
            | Self::Api {
                ..
            }
            | Self::Deployment {
                ..
            } => None,
            Self::Artifact {
                parent, ..
            } => parent.version(),
        }
    }

    /// Returns the spec slot when this address is at or below a spec.
    #[must_use]
    pub fn spec(&self) -> Option<&S> {
        match self {
            Self::Spec {
                spec, ..
            } => Some(spec),
            Self::Artifact {
                parent, ..
            } => parent.spec(),
            Self::Project {
                ..
            }
            | Self::Api {
                ..
            }
            | Self::Version {
                ..
            }
            | Self::Deployment {
                ..
            } => None,
        }
    }

    /// Returns the deployment slot when this address is at or below a deployment.
    #[must_use]
    pub fn deployment(&self) -> Option<&S> {
        match self {
            Self::Deployment {
                deployment, ..
            } => Some(deployment),
            Self::Artifact {
                parent, ..
            } => parent.deployment(),
            Self::Project {
                ..
            }
            | Self::Api {
                ..
            }
            | Self::Version {
                ..
            }
            | Self::Spec {
                ..
            } => None,
        }
    }

    /// Returns the revision slot of a spec or deployment (or of an artifact's parent).
    #[must_use]
    pub fn revision(&self) -> Option<&S> {
        match self {
            Self::Spec {
                revision, ..
            }
            | Self::Deployment {
                revision, ..
            } => revision.as_ref(),
            Self::Artifact {
                parent, ..
            } => parent.revision(),
            Self::Project {
                ..
            }
            | Self::Api {
                ..
            }
            | Self::Version {
                ..
            } => None,
        }
    }

    /// Returns the artifact slot when this address names an artifact.
    #[must_use]
    pub const fn artifact(&self) -> Option<&S> {
        match self {
            Self::Artifact {
                artifact, ..
            } => Some(artifact),
            Self::Project {
                ..
            }
            | Self::Api {
                ..
            }
            | Self::Version {
                ..
            }
            | Self::Spec {
                ..
            }
            | Self::Deployment {
                ..
            } => None,
        }
    }
}

impl ResourcePattern {
    /// Returns true when any slot, including revisions and artifact parents,
    /// is a `$resource` back-reference.
    #[must_use]
    pub fn has_reference(&self) -> bool {
        let is_reference = |segment: &Segment| matches!(segment, Segment::Reference(_));
        match self {
            Self::Artifact {
                parent,
                artifact,
            } => is_reference(artifact) || parent.has_reference(),
            Self::Project {
                ..
            }
            | Self::Api {
                ..
            }
            | Self::Version {
                ..
            }
            | Self::Spec {
                ..
            }
            | Self::Deployment {
                ..
            } => {
                is_reference(self.project())
                    || self.api().is_some_and(is_reference)
                    || self.version().is_some_and(is_reference)
                    || self.spec().is_some_and(is_reference)
                    || self.deployment().is_some_and(is_reference)
                    || self.revision().is_some_and(is_reference)
            }
        }
    }
}

impl<S: Clone> Resource<S> {
    /// Returns the immediate parent, or `None` for a project.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Project {
                ..
            } => None,
            Self::Api {
                project, ..
            } => Some(Self::Project {
                project: project.clone(),
            }),
            Self::Version {
                project,
                api,
                ..
            }
            | Self::Deployment {
                project,
                api,
                ..
            } => Some(Self::Api {
                project: project.clone(),
                api: api.clone(),
            }),
            Self::Spec {
                project,
                api,
                version,
                ..
            } => Some(Self::Version {
                project: project.clone(),
                api: api.clone(),
                version: version.clone(),
            }),
            Self::Artifact {
                parent, ..
            } => Some(parent.as_ref().clone()),
        }
    }

    /// Returns this address truncated to `kind`, or `None` when `kind` is not
    /// on its ancestry path.
    #[must_use]
    pub fn ancestor(&self, kind: ResourceKind) -> Option<Self> {
        let mut current = self.clone();
        loop {
            if current.kind() == kind {
                return Some(current);
            }
            current = current.parent()?;
        }
    }
}

impl<S: NameSegment> Resource<S> {
    /// Parses a name or pattern using the fixed catalog hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text does not follow the hierarchy or a
    /// slot is not a valid token for `S`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty {
                subject: S::SUBJECT,
            });
        }
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() % 2 != 0 {
            return Err(ParseError::Unpaired {
                subject: S::SUBJECT,
                input: text.to_string(),
            });
        }

        let mut current: Option<Self> = None;
        let mut location_seen = false;
        for pair in parts.chunks_exact(2) {
            let [collection, value] = pair else {
                continue;
            };
            if *collection == "locations" {
                if location_seen || !matches!(current, Some(Self::Project { .. })) {
                    return Err(unexpected_collection::<S>(text, collection));
                }
                if *value != GLOBAL_LOCATION {
                    return Err(ParseError::UnsupportedLocation {
                        subject: S::SUBJECT,
                        input: text.to_string(),
                        location: (*value).to_string(),
                    });
                }
                location_seen = true;
                continue;
            }
            current = Some(extend(current, collection, value, text)?);
        }
        current.ok_or_else(|| unexpected_collection::<S>(text, ""))
    }
}

/// Appends one `collection/value` pair to a partially parsed address.
fn extend<S: NameSegment>(
    current: Option<Resource<S>>,
    collection: &str,
    value: &str,
    text: &str,
) -> Result<Resource<S>, ParseError> {
    let slot = |token: &str| S::parse_segment(token).map_err(|err| err.within(S::SUBJECT, text));
    match (current, collection) {
        (None, "projects") => Ok(Resource::Project {
            project: slot(value)?,
        }),
        (
            Some(Resource::Project {
                project,
            }),
            "apis",
        ) => Ok(Resource::Api {
            project,
            api: slot(value)?,
        }),
        (
            Some(Resource::Api {
                project,
                api,
            }),
            "versions",
        ) => Ok(Resource::Version {
            project,
            api,
            version: slot(value)?,
        }),
        (
            Some(Resource::Api {
                project,
                api,
            }),
            "deployments",
        ) => {
            let (deployment, revision) = split_revision(value);
            Ok(Resource::Deployment {
                project,
                api,
                deployment: slot(deployment)?,
                revision: revision.map(slot).transpose()?,
            })
        }
        (
            Some(Resource::Version {
                project,
                api,
                version,
            }),
            "specs",
        ) => {
            let (spec, revision) = split_revision(value);
            Ok(Resource::Spec {
                project,
                api,
                version,
                spec: slot(spec)?,
                revision: revision.map(slot).transpose()?,
            })
        }
        (Some(parent), "artifacts") if parent.kind() != ResourceKind::Artifact => {
            Ok(Resource::Artifact {
                parent: Box::new(parent),
                artifact: slot(value)?,
            })
        }
        _ => Err(unexpected_collection::<S>(text, collection)),
    }
}

/// Splits `id@revision` into its identifier and optional revision.
fn split_revision(value: &str) -> (&str, Option<&str>) {
    match value.split_once(REVISION_SEPARATOR) {
        Some((id, revision)) => (id, Some(revision)),
        None => (value, None),
    }
}

/// Builds an unexpected-collection error for `S`.
fn unexpected_collection<S: NameSegment>(text: &str, collection: &str) -> ParseError {
    ParseError::UnexpectedCollection {
        subject: S::SUBJECT,
        input: text.to_string(),
        collection: collection.to_string(),
    }
}

/// Parses a concrete resource name.
///
/// # Errors
///
/// Returns [`ParseError`] when no resource kind matches.
pub fn parse_resource_name(text: &str) -> Result<ResourceName, ParseError> {
    ResourceName::parse(text)
}

/// Parses a resource pattern whose slots may be wildcards or back-references.
///
/// # Errors
///
/// Returns [`ParseError`] when no resource kind matches.
pub fn parse_resource_pattern(text: &str) -> Result<ResourcePattern, ParseError> {
    ResourcePattern::parse(text)
}

// ============================================================================
// SECTION: Display and Serde
// ============================================================================

impl<S: fmt::Display> fmt::Display for Resource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project {
                project,
            } => write!(f, "projects/{project}/locations/{GLOBAL_LOCATION}"),
            Self::Api {
                project,
                api,
            } => write!(f, "projects/{project}/locations/{GLOBAL_LOCATION}/apis/{api}"),
            Self::Version {
                project,
                api,
                version,
            } => write!(
                f,
                "projects/{project}/locations/{GLOBAL_LOCATION}/apis/{api}/versions/{version}"
            ),
            Self::Spec {
                project,
                api,
                version,
                spec,
                revision,
            } => {
                write!(
                    f,
                    "projects/{project}/locations/{GLOBAL_LOCATION}/apis/{api}/versions/{version}/\
                     specs/{spec}"
                )?;
                write_revision(f, revision.as_ref())
            }
            Self::Deployment {
                project,
                api,
                deployment,
                revision,
            } => {
                write!(
                    f,
                    "projects/{project}/locations/{GLOBAL_LOCATION}/apis/{api}/deployments/\
                     {deployment}"
                )?;
                write_revision(f, revision.as_ref())
            }
            Self::Artifact {
                parent,
                artifact,
            } => write!(f, "{parent}/artifacts/{artifact}"),
        }
    }
}

/// Writes an `@revision` suffix when present.
fn write_revision<S: fmt::Display>(f: &mut fmt::Formatter<'_>, revision: Option<&S>) -> fmt::Result {
    match revision {
        Some(revision) => write!(f, "{REVISION_SEPARATOR}{revision}"),
        None => Ok(()),
    }
}

impl<S: fmt::Display> Serialize for Resource<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, S: NameSegment> Deserialize<'de> for Resource<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
