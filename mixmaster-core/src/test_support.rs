//! Test-only builders for catalog records.
//!
//! Records built here skip draft validation, so tests can describe exactly
//! the attributes a scenario needs without spelling out a full draft.

use crate::{
    Catalog, CatalogLoadError, CocktailRecord, Flavor, Occasion, Season, Skill, Spirit, Strength,
};

/// Fluent builder for [`CocktailRecord`] values.
///
/// Defaults describe a beginner rum drink of strength 5 tagged
/// `citrus`, `party` and `summer`.
#[derive(Debug, Clone)]
pub struct CocktailBuilder {
    record: CocktailRecord,
}

impl CocktailBuilder {
    /// Start a builder for a cocktail called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: CocktailRecord {
                name: name.into(),
                base_spirit: Spirit::Rum,
                flavor_tags: vec![Flavor::Citrus],
                skill_required: Skill::Beginner,
                strength_rating: Strength(5),
                occasion_tags: vec![Occasion::Party],
                season_tags: vec![Season::Summer],
                glass: "Rocks".into(),
                ingredients: Vec::new(),
                techniques: Vec::new(),
                history: String::new(),
            },
        }
    }

    /// Set the base spirit.
    #[must_use]
    pub fn spirit(mut self, spirit: Spirit) -> Self {
        self.record.base_spirit = spirit;
        self
    }

    /// Replace the flavour tags.
    #[must_use]
    pub fn flavors(mut self, flavors: &[Flavor]) -> Self {
        self.record.flavor_tags = flavors.to_vec();
        self
    }

    /// Set the required skill.
    #[must_use]
    pub fn skill(mut self, skill: Skill) -> Self {
        self.record.skill_required = skill;
        self
    }

    /// Set the strength rating, clamped onto the scale.
    #[must_use]
    pub fn strength(mut self, rating: u8) -> Self {
        self.record.strength_rating = Strength(rating.clamp(Strength::MIN, Strength::MAX));
        self
    }

    /// Replace the occasion tags.
    #[must_use]
    pub fn occasions(mut self, occasions: &[Occasion]) -> Self {
        self.record.occasion_tags = occasions.to_vec();
        self
    }

    /// Replace the season tags.
    #[must_use]
    pub fn seasons(mut self, seasons: &[Season]) -> Self {
        self.record.season_tags = seasons.to_vec();
        self
    }

    /// Set the serving glass.
    #[must_use]
    pub fn glass(mut self, glass: &str) -> Self {
        self.record.glass = glass.to_owned();
        self
    }

    /// Replace the ingredient list.
    #[must_use]
    pub fn ingredients(mut self, ingredients: &[&str]) -> Self {
        self.record.ingredients = ingredients.iter().map(|&item| item.to_owned()).collect();
        self
    }

    /// Replace the technique list.
    #[must_use]
    pub fn techniques(mut self, techniques: &[&str]) -> Self {
        self.record.techniques = techniques.iter().map(|&item| item.to_owned()).collect();
        self
    }

    /// Set the background story.
    #[must_use]
    pub fn history(mut self, history: &str) -> Self {
        self.record.history = history.to_owned();
        self
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> CocktailRecord {
        self.record
    }
}

/// Build a catalog from builders, keeping their order.
///
/// # Errors
/// Returns [`CatalogLoadError::DuplicateName`] when two builders share a
/// name.
pub fn catalog_of<I>(builders: I) -> Result<Catalog, CatalogLoadError>
where
    I: IntoIterator<Item = CocktailBuilder>,
{
    Catalog::from_records(builders.into_iter().map(CocktailBuilder::build).collect())
}
