//! Cocktail records: one immutable catalog entry.
//!
//! Records are built from a [`CocktailDraft`], the raw shape read from a
//! catalog source, and validated field by field. Enum-typed fields are kept
//! as strings in the draft so a bad value can be reported against the record
//! that carries it.

use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Flavor, Occasion, Season, Skill, Spirit, Strength, StrengthError, VocabularyError};

/// Raw, unvalidated cocktail entry as it appears in a catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CocktailDraft {
    /// Unique cocktail name.
    pub name: String,
    /// Base spirit token.
    pub base_spirit: String,
    /// Flavour tokens.
    pub flavor_tags: Vec<String>,
    /// Required skill token.
    pub skill_required: String,
    /// Strength rating, expected in `1..=10`.
    pub strength_rating: i64,
    /// Occasion tokens.
    pub occasion_tags: Vec<String>,
    /// Season tokens, possibly including `all_seasons`.
    pub season_tags: Vec<String>,
    /// Serving glass.
    #[serde(default)]
    pub glass: String,
    /// Ingredients in preparation order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Techniques in preparation order.
    #[serde(default)]
    pub techniques: Vec<String>,
    /// Background story.
    #[serde(default)]
    pub history: String,
}

/// Errors returned by [`CocktailRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CocktailRecordError {
    /// The name was empty or whitespace.
    #[error("cocktail name must not be blank")]
    BlankName,
    /// An enum-typed field held a token outside its vocabulary.
    #[error("invalid {field}: {source}")]
    InvalidToken {
        /// Offending field.
        field: &'static str,
        /// Underlying vocabulary failure.
        #[source]
        source: VocabularyError,
    },
    /// The base spirit was the neutral `no_preference` token.
    #[error("base_spirit must name a concrete spirit, not no_preference")]
    AbstractBaseSpirit,
    /// The strength rating was off the scale.
    #[error("invalid strength_rating: {source}")]
    InvalidStrength {
        /// Underlying strength failure.
        #[source]
        source: StrengthError,
    },
    /// A tag set was empty.
    #[error("{field} must contain at least one tag")]
    EmptyTags {
        /// Offending field.
        field: &'static str,
    },
    /// A tag appeared twice in the same set.
    #[error("{field} lists '{tag}' more than once")]
    DuplicateTag {
        /// Offending field.
        field: &'static str,
        /// Repeated tag.
        tag: String,
    },
    /// A list held an empty or whitespace-only entry.
    #[error("{field} contains a blank entry")]
    BlankEntry {
        /// Offending field.
        field: &'static str,
    },
}

/// A validated, immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CocktailRecord {
    pub(crate) name: String,
    pub(crate) base_spirit: Spirit,
    pub(crate) flavor_tags: Vec<Flavor>,
    pub(crate) skill_required: Skill,
    pub(crate) strength_rating: Strength,
    pub(crate) occasion_tags: Vec<Occasion>,
    pub(crate) season_tags: Vec<Season>,
    pub(crate) glass: String,
    pub(crate) ingredients: Vec<String>,
    pub(crate) techniques: Vec<String>,
    pub(crate) history: String,
}

impl CocktailRecord {
    /// Validate a draft and construct a [`CocktailRecord`].
    ///
    /// # Errors
    /// Returns [`CocktailRecordError`] for the first field that breaks an
    /// invariant, checked in declaration order.
    ///
    /// # Examples
    /// ```
    /// use mixmaster_core::{CocktailDraft, CocktailRecord, Spirit};
    ///
    /// let draft = CocktailDraft {
    ///     name: "Daiquiri".into(),
    ///     base_spirit: "rum".into(),
    ///     flavor_tags: vec!["citrus".into()],
    ///     skill_required: "beginner".into(),
    ///     strength_rating: 5,
    ///     occasion_tags: vec!["party".into()],
    ///     season_tags: vec!["summer".into()],
    ///     ..CocktailDraft::default()
    /// };
    /// let record = CocktailRecord::new(draft).expect("valid draft");
    /// assert_eq!(record.base_spirit(), Spirit::Rum);
    /// ```
    pub fn new(draft: CocktailDraft) -> Result<Self, CocktailRecordError> {
        let name = draft.name.trim().to_owned();
        if name.is_empty() {
            return Err(CocktailRecordError::BlankName);
        }
        let base_spirit: Spirit = parse_token("base_spirit", &draft.base_spirit)?;
        if base_spirit.is_no_preference() {
            return Err(CocktailRecordError::AbstractBaseSpirit);
        }
        let flavor_tags = parse_tags("flavor_tags", &draft.flavor_tags)?;
        let skill_required = parse_token("skill_required", &draft.skill_required)?;
        let strength_rating = Strength::try_from(draft.strength_rating)
            .map_err(|source| CocktailRecordError::InvalidStrength { source })?;
        let occasion_tags = parse_tags("occasion_tags", &draft.occasion_tags)?;
        let season_tags = parse_tags("season_tags", &draft.season_tags)?;
        let ingredients = non_blank_entries("ingredients", draft.ingredients)?;
        let techniques = non_blank_entries("techniques", draft.techniques)?;

        Ok(Self {
            name,
            base_spirit,
            flavor_tags,
            skill_required,
            strength_rating,
            occasion_tags,
            season_tags,
            glass: draft.glass.trim().to_owned(),
            ingredients,
            techniques,
            history: draft.history.trim().to_owned(),
        })
    }

    /// Unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base spirit; never [`Spirit::NoPreference`].
    #[must_use]
    pub const fn base_spirit(&self) -> Spirit {
        self.base_spirit
    }

    /// Flavour tags in source order.
    #[must_use]
    pub fn flavor_tags(&self) -> &[Flavor] {
        &self.flavor_tags
    }

    /// Skill needed to prepare the drink.
    #[must_use]
    pub const fn skill_required(&self) -> Skill {
        self.skill_required
    }

    /// Strength rating.
    #[must_use]
    pub const fn strength_rating(&self) -> Strength {
        self.strength_rating
    }

    /// Occasion tags in source order.
    #[must_use]
    pub fn occasion_tags(&self) -> &[Occasion] {
        &self.occasion_tags
    }

    /// Season tags in source order.
    #[must_use]
    pub fn season_tags(&self) -> &[Season] {
        &self.season_tags
    }

    /// Serving glass.
    #[must_use]
    pub fn glass(&self) -> &str {
        &self.glass
    }

    /// Ingredients in preparation order.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Techniques in preparation order.
    #[must_use]
    pub fn techniques(&self) -> &[String] {
        &self.techniques
    }

    /// Background story.
    #[must_use]
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Report whether the record carries the flavour tag.
    #[must_use]
    pub fn has_flavor(&self, flavor: Flavor) -> bool {
        self.flavor_tags.contains(&flavor)
    }

    /// Report whether the record carries the occasion tag.
    #[must_use]
    pub fn has_occasion(&self, occasion: Occasion) -> bool {
        self.occasion_tags.contains(&occasion)
    }

    /// Report whether the record carries the season tag verbatim.
    #[must_use]
    pub fn has_season(&self, season: Season) -> bool {
        self.season_tags.contains(&season)
    }
}

fn parse_token<T>(field: &'static str, raw: &str) -> Result<T, CocktailRecordError>
where
    T: FromStr<Err = VocabularyError>,
{
    raw.parse()
        .map_err(|source| CocktailRecordError::InvalidToken { field, source })
}

fn parse_tags<T>(field: &'static str, raw: &[String]) -> Result<Vec<T>, CocktailRecordError>
where
    T: FromStr<Err = VocabularyError> + Copy + Eq + Hash,
{
    if raw.is_empty() {
        return Err(CocktailRecordError::EmptyTags { field });
    }
    let mut seen = HashSet::with_capacity(raw.len());
    let mut tags = Vec::with_capacity(raw.len());
    for token in raw {
        let tag: T = parse_token(field, token)?;
        if !seen.insert(tag) {
            return Err(CocktailRecordError::DuplicateTag {
                field,
                tag: token.trim().to_owned(),
            });
        }
        tags.push(tag);
    }
    Ok(tags)
}

fn non_blank_entries(
    field: &'static str,
    entries: Vec<String>,
) -> Result<Vec<String>, CocktailRecordError> {
    entries
        .into_iter()
        .map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                Err(CocktailRecordError::BlankEntry { field })
            } else {
                Ok(trimmed.to_owned())
            }
        })
        .collect()
}
