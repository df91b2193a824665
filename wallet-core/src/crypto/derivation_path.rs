// wallet-core/src/crypto/derivation_path.rs
//
// Path Parser - "m/44'/60'/0'/0/0" → [44H, 60H, 0H, 0, 0]
// Hardened marker: ' hoặc h (H cũng được chấp nhận)

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Offset cộng vào index khi derive hardened child (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Một bước trong derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildStep {
    index: u32,
    hardened: bool,
}

impl ChildStep {
    /// `index` phải < 2^31, nếu không trả về `InvalidComponent`
    pub fn new(index: u32, hardened: bool) -> Result<Self, ParseError> {
        if index >= HARDENED_OFFSET {
            return Err(ParseError::InvalidComponent(index.to_string()));
        }
        Ok(Self { index, hardened })
    }

    pub fn normal(index: u32) -> Result<Self, ParseError> {
        Self::new(index, false)
    }

    pub fn hardened(index: u32) -> Result<Self, ParseError> {
        Self::new(index, true)
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// Index as handed to the BIP32 primitive (hardened steps offset by 2^31).
    #[inline]
    pub fn raw(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }

    fn parse_component(component: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidComponent(component.to_string());

        let (digits, hardened) = match component.strip_suffix(&['\'', 'h', 'H'][..]) {
            Some(rest) => (rest, true),
            None => (component, false),
        };

        // u32::from_str chấp nhận "+5", nên kiểm tra digits trước
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let index: u32 = digits.parse().map_err(|_| invalid())?;
        Self::new(index, hardened).map_err(|_| invalid())
    }
}

impl fmt::Display for ChildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// Ordered derivation steps, root to leaf. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    steps: Vec<ChildStep>,
}

impl DerivationPath {
    /// Parse path string.
    ///
    /// A leading `m` is ignored and empty components are skipped, so `""`,
    /// `"m"` and `"m/"` all name the master key. Components are not trimmed.
    pub fn parse(path: &str) -> Result<Self, ParseError> {
        let mut steps = Vec::new();

        for (position, component) in path.split('/').enumerate() {
            if component.is_empty() {
                continue;
            }
            if position == 0 && (component == "m" || component == "M") {
                continue;
            }
            steps.push(ChildStep::parse_component(component)?);
        }

        Ok(Self { steps })
    }

    #[inline]
    pub fn steps(&self) -> &[ChildStep] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Path mới = path hiện tại + 1 bước
    pub fn child(&self, step: ChildStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self { steps }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildStep> {
        self.steps.iter()
    }
}

impl FromStr for DerivationPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for step in &self.steps {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildStep;
    type IntoIter = std::slice::Iter<'a, ChildStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Shorthand for [`DerivationPath::parse`].
pub fn parse_path(path: &str) -> Result<DerivationPath, ParseError> {
    DerivationPath::parse(path)
}

// =============================================================================
// TESTS
// =============================================================================
