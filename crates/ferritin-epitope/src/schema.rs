//! Resolution of label-table column names onto the canonical fields.
//!
//! Label tables come in two naming conventions: UniProt-style
//! (`uniprot_pos`, `uniprot_aa`, `label_epitope`) and residue-style
//! (`residue_index`, `residue_name`, `is_epitope`). Each canonical field is
//! resolved once, trying its aliases in order.
use crate::EpitopeError;
use std::fmt;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CanonicalField {
    ResidueIndex,
    ResidueName,
    IsEpitope,
}

impl CanonicalField {
    /// Accepted column names, in resolution order.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::ResidueIndex => &["uniprot_pos", "residue_index"],
            CanonicalField::ResidueName => &["uniprot_aa", "residue_name"],
            CanonicalField::IsEpitope => &["label_epitope", "is_epitope"],
        }
    }

    fn resolve<S: AsRef<str>>(&self, columns: &[S]) -> Option<String> {
        self.aliases()
            .iter()
            .find(|alias| columns.iter().any(|column| column.as_ref() == **alias))
            .map(|alias| alias.to_string())
    }
}

/// Actual column names backing each canonical field of one label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub residue_index: String,
    pub residue_name: Option<String>,
    pub is_epitope: Option<String>,
}

impl ColumnMapping {
    /// Resolve all canonical fields against a table's column names.
    ///
    /// Fails when no index alias is present; name and label may stay unmapped.
    pub fn resolve<S: AsRef<str>>(columns: &[S]) -> Result<Self, EpitopeError> {
        let residue_index = CanonicalField::ResidueIndex.resolve(columns).ok_or_else(|| {
            EpitopeError::MissingIndexColumn {
                expected: CanonicalField::ResidueIndex
                    .aliases()
                    .iter()
                    .map(|alias| alias.to_string())
                    .collect(),
                found: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            }
        })?;
        Ok(ColumnMapping {
            residue_index,
            residue_name: CanonicalField::ResidueName.resolve(columns),
            is_epitope: CanonicalField::IsEpitope.resolve(columns),
        })
    }

    pub fn column(&self, field: CanonicalField) -> Option<&str> {
        match field {
            CanonicalField::ResidueIndex => Some(self.residue_index.as_str()),
            CanonicalField::ResidueName => self.residue_name.as_deref(),
            CanonicalField::IsEpitope => self.is_epitope.as_deref(),
        }
    }
}

impl fmt::Display for ColumnMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = CanonicalField::iter()
            .map(|field| match self.column(field) {
                Some(column) => format!("{} <- {}", field, column),
                None => format!("{} <- (unmapped)", field),
            })
            .collect();
        write!(f, "{}", pairs.join(", "))
    }
}
