//! Basketball facts per locale and uniform random selection.

use hoopfacts_core::{error::SkillError, locale::Locale};
use rand::{Rng, RngCore};
use std::collections::HashMap;

const ES: &[&str] = &[
    "¿Sabías qué? Michael Jordan ganó seis campeonatos de la NBA con los Chicago Bulls.",
    "¿Sabías qué? La línea de tres puntos en la NBA está a 7.24 metros del aro.",
    "¿Sabías qué? Kareem Abdul-Jabbar es el máximo anotador en la historia de la NBA.",
    "¿Sabías qué? El primer juego de baloncesto se jugó con un balón de fútbol y canastas de melocotón.",
    "¿Sabías qué? Los Boston Celtics tienen el récord de más campeonatos ganados en la historia de la NBA.",
    "¿Sabías qué? Wilt Chamberlain es el único jugador que ha anotado 100 puntos en un solo partido de la NBA.",
    "¿Sabías qué? La NBA fue fundada en 1946 como la Basketball Association of America (BAA).",
    "¿Sabías qué? El término 'slam dunk' fue popularizado por Julius Erving, también conocido como Dr. J.",
];

const EN: &[&str] = &[
    "Did you know? Michael Jordan won six NBA championships with the Chicago Bulls.",
    "Did you know? The three-point line in the NBA is 7.24 meters (23.75 feet) from the basket.",
    "Did you know? Kareem Abdul-Jabbar is the all-time leading scorer in NBA history.",
    "Did you know? The first basketball game was played with a soccer ball and peach baskets.",
    "Did you know? The Boston Celtics hold the record for the most championships won in NBA history.",
    "Did you know? Wilt Chamberlain is the only player to have scored 100 points in a single NBA game.",
    "Did you know? The NBA was founded in 1946 as the Basketball Association of America (BAA).",
    "Did you know? The term 'slam dunk' was popularized by Julius Erving, also known as Dr. J.",
];

/// Immutable locale → ordered fact list.
#[derive(Debug)]
pub struct FactTable {
    facts: HashMap<Locale, &'static [&'static str]>,
    fallback: Locale,
}

impl FactTable {
    pub fn from_entries(rows: &[(Locale, &'static [&'static str])], fallback: Locale) -> Self {
        Self {
            facts: rows.iter().copied().collect(),
            fallback,
        }
    }

    /// The built-in English and Spanish facts.
    pub fn builtin(fallback: Locale) -> Self {
        Self::from_entries(&[(Locale::Es, ES), (Locale::En, EN)], fallback)
    }

    /// Facts for a request tag; unmatched tags use the fallback locale's list.
    pub fn facts_for(&self, tag: Option<&str>) -> &'static [&'static str] {
        let locale = Locale::resolve(tag, self.fallback);
        self.facts.get(&locale).copied().unwrap_or_default()
    }

    /// Pick one fact uniformly at random. Draws are independent, so
    /// consecutive calls may repeat a fact.
    pub fn pick_fact<R: RngCore + ?Sized>(
        &self,
        tag: Option<&str>,
        rng: &mut R,
    ) -> Result<&'static str, SkillError> {
        let facts = self.facts_for(tag);
        if facts.is_empty() {
            return Err(SkillError::MissingFacts(tag.unwrap_or("<none>").to_string()));
        }
        let index = rng.gen_range(0..facts.len());
        Ok(facts[index])
    }

    /// Every supported locale must have at least one non-blank fact.
    pub fn validate(&self) -> Result<(), SkillError> {
        for locale in Locale::ALL {
            let facts = self.facts.get(&locale).copied().unwrap_or_default();
            if facts.is_empty() {
                return Err(SkillError::MissingFacts(locale.to_string()));
            }
            if facts.iter().any(|f| f.trim().is_empty()) {
                return Err(SkillError::Config(format!("blank fact in locale {locale}")));
            }
        }
        Ok(())
    }
}
