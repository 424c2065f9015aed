use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds a value outside its allowed options
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Runtime configuration of a [`DynUnionFind`](crate::uf::DynUnionFind).
///
/// ```
/// use ufkit::uf::*;
///
/// let settings = UnionFindSettingsBuilder::default()
///     .strategy("tree".to_string())
///     .weighted(false)
///     .build()
///     .unwrap();
/// assert!(settings.path_compression);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnionFindSettings {
    ///union-find strategy ("flat" or "tree")
    #[builder(default = r#""tree".to_string()"#)]
    pub strategy: String,

    ///link the smaller tree below the larger root ("tree" only)
    #[builder(default = "true")]
    pub weighted: bool,

    ///halve search paths during root searches ("tree" only)
    #[builder(default = "true")]
    pub path_compression: bool,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for UnionFindSettings {
    fn default() -> UnionFindSettings {
        // builder defaults always pass validation
        UnionFindSettingsBuilder::default()
            .build()
            .unwrap_or_else(|_| unreachable!())
    }
}

impl UnionFindSettings {
    /// Checks that fields specified by strings contain valid options.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_strategy(&self.strategy)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for UnionFindSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        UnionFindSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl UnionFindSettingsBuilder {
    /// check that the specified strategy is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref strategy) = self.strategy {
            validate_strategy(strategy)?;
        }
        Ok(())
    }
}

fn validate_strategy(strategy: &str) -> Result<(), SettingsError> {
    match strategy {
        "flat" => Ok(()),
        "tree" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("strategy")),
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = UnionFindSettingsBuilder::default().build().unwrap();
    assert_eq!(settings.strategy, "tree");
    assert!(settings.weighted && settings.path_compression);
    assert!(!settings.verbose);
    assert_eq!(settings, UnionFindSettings::default());

    // fail on unknown strategy
    assert!(UnionFindSettingsBuilder::default()
        .strategy("quick_union".to_string())
        .build()
        .is_err());

    // flat is accepted
    assert!(UnionFindSettingsBuilder::default()
        .strategy("flat".to_string())
        .build()
        .is_ok());

    // directly construct bad settings and manually check
    let settings = UnionFindSettings {
        strategy: "foo".to_string(),
        ..UnionFindSettings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("strategy"))
    ));
}
