use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoanType {
    #[default]
    Usda,
    Fha,
    Traditional,
}

impl LoanType {
    /// Every loan type in catalog order.
    pub const ALL: [LoanType; 3] = [Self::Usda, Self::Fha, Self::Traditional];

    pub fn index(&self) -> usize {
        match self {
            Self::Usda => 0,
            Self::Fha => 1,
            Self::Traditional => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usda => "USDA",
            Self::Fha => "FHA",
            Self::Traditional => "TRADITIONAL",
        }
    }

    /// Parses a short name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USDA" => Some(Self::Usda),
            "FHA" => Some(Self::Fha),
            "TRADITIONAL" => Some(Self::Traditional),
            _ => None,
        }
    }
}
