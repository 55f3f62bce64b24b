// Sun Oct 18 2026 - Alex

use crate::pattern::{PatternError, Signature, SignatureKind, SignatureSet};
use std::path::PathBuf;

/// One signature as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureSource {
    pub kind: SignatureKind,
    pub text: String,
}

impl SignatureSource {
    pub fn new(kind: SignatureKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn compile(&self) -> Result<Signature, PatternError> {
        self.kind.compile(&self.text)
    }
}

/// Everything a scan needs: the target file and its compiled signatures.
#[derive(Debug, Clone)]
pub struct Config {
    pub target_file: PathBuf,
    pub signatures: SignatureSet,
}

impl Config {
    /// Compiles every source in order. The first failure aborts the build.
    pub fn build(target_file: PathBuf, sources: &[SignatureSource]) -> Result<Self, PatternError> {
        let signatures = sources
            .iter()
            .map(|source| -> Result<Signature, PatternError> {
                let signature = source.compile()?;
                log::debug!("{} {:?} compiled to [{}]", source.kind, source.text, signature);
                Ok(signature)
            })
            .collect::<Result<SignatureSet, PatternError>>()?;

        Ok(Self {
            target_file,
            signatures,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.signatures.is_empty() {
            return Err("At least one signature must be given".to_string());
        }
        if self.target_file.as_os_str().is_empty() {
            return Err("A target file must be given".to_string());
        }
        Ok(())
    }
}
