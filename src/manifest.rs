//! Descriptor written as `info.json` at the root of an artifact bundle.

use crate::platform::Triple;
use crate::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: &str = "1.0";

/// Name of the single artifact carried by every bundle
pub const ARTIFACT_NAME: &str = "sur";

/// Location of the executable inside the bundle
pub const EXECUTABLE_PATH: &str = "bin/sur";

pub const INFO_FILE: &str = "info.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleInfo {
    pub schema_version: String,
    pub artifacts: BTreeMap<String, Artifact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Executable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub path: String,
    pub supported_triples: Vec<Triple>,
}

impl BundleInfo {
    /// Descriptor for the `sur` executable at `version`
    pub fn for_executable(version: &str) -> Self {
        let artifact = Artifact {
            version: version.to_string(),
            kind: ArtifactKind::Executable,
            variants: vec![Variant {
                path: EXECUTABLE_PATH.to_string(),
                supported_triples: Triple::SUPPORTED.to_vec(),
            }],
        };

        let mut artifacts = BTreeMap::new();
        artifacts.insert(ARTIFACT_NAME.to_string(), artifact);

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            artifacts,
        }
    }

    /// Render as JSON indented by four spaces
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_descriptor_shape() {
        let info = BundleInfo::for_executable("1.2.3");
        let value: Value = serde_json::from_slice(&info.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "schemaVersion": "1.0",
                "artifacts": {
                    "sur": {
                        "version": "1.2.3",
                        "type": "executable",
                        "variants": [
                            {
                                "path": "bin/sur",
                                "supportedTriples": ["x86_64-apple-macosx", "arm64-apple-macosx"]
                            }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_four_space_layout() {
        let text = String::from_utf8(BundleInfo::for_executable("0.0.1-beta").to_json().unwrap()).unwrap();
        let expected = r#"{
    "schemaVersion": "1.0",
    "artifacts": {
        "sur": {
            "version": "0.0.1-beta",
            "type": "executable",
            "variants": [
                {
                    "path": "bin/sur",
                    "supportedTriples": [
                        "x86_64-apple-macosx",
                        "arm64-apple-macosx"
                    ]
                }
            ]
        }
    }
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_version_is_verbatim() {
        let version = "2.0.0+build.7 \"rc\"";
        let info = BundleInfo::for_executable(version);
        let parsed: BundleInfo = serde_json::from_slice(&info.to_json().unwrap()).unwrap();
        assert_eq!(parsed.artifacts[ARTIFACT_NAME].version, version);
        assert_eq!(parsed, info);
    }
}
