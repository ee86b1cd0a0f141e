use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;

use crate::rng::Lfg31;

/// Expected-output file for parity checking, e.g. against another language
/// port or a captured run of the original binary.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorFile {
    pub case: Vec<VectorCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VectorCase {
    pub seed: u32,
    pub expect: Vec<u32>,
}

/// First point of divergence between the generator and an expected vector.
#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    pub got: u32,
    pub expected: u32,
}

impl VectorFile {
    pub fn from_toml(fname: &str) -> Result<Self> {
        let mut file = File::open(fname).with_context(|| format!("opening {}", fname))?;
        let mut file_as_string = String::new();
        file.read_to_string(&mut file_as_string)?;
        toml::from_str(&file_as_string).with_context(|| format!("parsing {}", fname))
    }
}

impl VectorCase {
    /// Runs a fresh generator against the expected words, returning the
    /// first divergence if any.
    pub fn check(&self) -> Option<Mismatch> {
        let mut rng = Lfg31::new(self.seed);
        for (index, &expected) in self.expect.iter().enumerate() {
            let got = rng.next_u32();
            if got != expected {
                return Some(Mismatch {
                    index,
                    got,
                    expected,
                });
            }
        }
        None
    }
}
