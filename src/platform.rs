use serde::{Deserialize, Serialize};

/// Platform triples the bundled executable is published for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Triple {
    #[serde(rename = "x86_64-apple-macosx")]
    X86_64AppleMacosx,
    #[serde(rename = "arm64-apple-macosx")]
    Arm64AppleMacosx,
}

impl Triple {
    /// Every supported triple, in descriptor order
    pub const SUPPORTED: [Triple; 2] = [Triple::X86_64AppleMacosx, Triple::Arm64AppleMacosx];

    pub fn as_str(&self) -> &'static str {
        match self {
            Triple::X86_64AppleMacosx => "x86_64-apple-macosx",
            Triple::Arm64AppleMacosx => "arm64-apple-macosx",
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
