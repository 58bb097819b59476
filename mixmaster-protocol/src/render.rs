//! Render ranked entries as the fixed block report.
//!
//! Each entry becomes one block:
//!
//! ```text
//! [Match Score: 100]
//! **Mojito**
//! Base Spirit: rum
//! Strength: 4  Complexity: Moderate
//! Ingredients: White rum, Fresh lime juice
//! Techniques: Muddle
//! Flavors: citrus, herbal
//! Best for: party, casual_relaxing
//! Season: spring, summer  Glass: Highball
//! History: A Havana highball.
//! ----------------------------------------
//! ```
//!
//! The score line appears only in recommend mode.

use std::fmt::{self, Display, Write};

use mixmaster_scorer::ScoredEntry;
use serde::Serialize;

/// Line closing every block.
pub const SEPARATOR: &str = "----------------------------------------";

/// Which listing a report renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Scored recommendations; blocks open with the score line.
    Recommend,
    /// The whole catalog; blocks carry no score line.
    BrowseAll,
}

/// A renderable report over ranked entries.
#[derive(Debug, Clone, Copy)]
pub struct Report<'e, 'a> {
    entries: &'e [ScoredEntry<'a>],
    mode: RenderMode,
}

impl<'e, 'a> Report<'e, 'a> {
    /// Prepare a report for `entries`.
    #[must_use]
    pub const fn new(entries: &'e [ScoredEntry<'a>], mode: RenderMode) -> Self {
        Self { entries, mode }
    }
}

fn joined<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_block(f: &mut impl Write, entry: &ScoredEntry<'_>, mode: RenderMode) -> fmt::Result {
    let cocktail = entry.cocktail;
    if let (RenderMode::Recommend, Some(total)) = (mode, entry.total()) {
        writeln!(f, "[Match Score: {total}]")?;
    }
    writeln!(f, "**{}**", cocktail.name())?;
    writeln!(f, "Base Spirit: {}", cocktail.base_spirit())?;
    writeln!(
        f,
        "Strength: {}  Complexity: {}",
        cocktail.strength_rating(),
        cocktail.skill_required().complexity()
    )?;
    writeln!(f, "Ingredients: {}", joined(cocktail.ingredients()))?;
    writeln!(f, "Techniques: {}", joined(cocktail.techniques()))?;
    writeln!(f, "Flavors: {}", joined(cocktail.flavor_tags()))?;
    writeln!(f, "Best for: {}", joined(cocktail.occasion_tags()))?;
    writeln!(
        f,
        "Season: {}  Glass: {}",
        joined(cocktail.season_tags()),
        cocktail.glass()
    )?;
    writeln!(f, "History: {}", cocktail.history())?;
    writeln!(f, "{SEPARATOR}")
}

impl Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entries
            .iter()
            .try_for_each(|entry| write_block(f, entry, self.mode))
    }
}

/// Render `entries` as block text; an empty slice renders as an empty body.
///
/// # Examples
///
/// ```
/// use mixmaster_core::Catalog;
/// use mixmaster_protocol::{RenderMode, render};
/// use mixmaster_scorer::Ranker;
///
/// let catalog = Catalog::bundled().expect("bundled catalog");
/// let entries = Ranker::default().browse_all(&catalog);
/// let body = render(&entries, RenderMode::BrowseAll);
/// assert!(body.starts_with("**Mojito**\n"));
/// assert!(!body.contains("[Match Score:"));
/// assert_eq!(render(&[], RenderMode::Recommend), "");
/// ```
#[must_use]
pub fn render(entries: &[ScoredEntry<'_>], mode: RenderMode) -> String {
    Report::new(entries, mode).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixmaster_core::test_support::CocktailBuilder;
    use mixmaster_core::{CocktailRecord, Dimension, Flavor, MatchScore, Occasion, Season, Skill};
    use rstest::{fixture, rstest};

    #[fixture]
    fn clover_club() -> CocktailRecord {
        CocktailBuilder::new("Clover Club")
            .spirit(mixmaster_core::Spirit::Gin)
            .flavors(&[Flavor::Sweet, Flavor::Creamy])
            .skill(Skill::Expert)
            .strength(4)
            .occasions(&[Occasion::Celebration])
            .seasons(&[Season::Spring, Season::Summer])
            .glass("Coupe")
            .ingredients(&["Gin", "Raspberry syrup", "Lemon juice", "Egg white"])
            .techniques(&["Dry shake", "Shake"])
            .history("A Philadelphia gentlemen's club favourite.")
            .build()
    }

    #[rstest]
    fn recommend_blocks_open_with_the_score(clover_club: CocktailRecord) {
        let score = MatchScore::from_contributions([(Dimension::Spirit, 20), (Dimension::Season, 15)]);
        let entries = [ScoredEntry::scored(&clover_club, score)];
        let expected = "\
[Match Score: 35]
**Clover Club**
Base Spirit: gin
Strength: 4  Complexity: Complex
Ingredients: Gin, Raspberry syrup, Lemon juice, Egg white
Techniques: Dry shake, Shake
Flavors: sweet, creamy
Best for: celebration
Season: spring, summer  Glass: Coupe
History: A Philadelphia gentlemen's club favourite.
----------------------------------------
";
        assert_eq!(render(&entries, RenderMode::Recommend), expected);
    }

    #[rstest]
    fn browse_blocks_omit_the_score(clover_club: CocktailRecord) {
        let entries = [ScoredEntry::unscored(&clover_club)];
        let body = render(&entries, RenderMode::BrowseAll);
        assert!(body.starts_with("**Clover Club**\n"));
        assert!(!body.contains("Match Score"));
    }

    #[rstest]
    fn empty_lists_render_empty_fields() {
        let plain = CocktailBuilder::new("Highball").build();
        let body = render(&[ScoredEntry::unscored(&plain)], RenderMode::BrowseAll);
        assert!(body.contains("\nIngredients: \n"));
        assert!(body.contains("\nTechniques: \n"));
        assert!(body.contains("\nHistory: \n"));
    }

    #[rstest]
    fn blocks_follow_entry_order(clover_club: CocktailRecord) {
        let second = CocktailBuilder::new("Bee's Knees").build();
        let entries = [ScoredEntry::unscored(&clover_club), ScoredEntry::unscored(&second)];
        let body = render(&entries, RenderMode::BrowseAll);
        assert_eq!(body.matches(SEPARATOR).count(), 2);
        let first_at = body.find("**Clover Club**");
        let second_at = body.find("**Bee's Knees**");
        assert!(first_at < second_at);
    }

    #[rstest]
    fn separator_is_forty_dashes() {
        assert_eq!(SEPARATOR.len(), 40);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }
}
