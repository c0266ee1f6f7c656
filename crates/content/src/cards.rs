use serde::{Deserialize, Serialize};

use portal_core::{DomainError, DomainResult, Entity, position_by_id};

/// Homepage tile linking to an internal tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub enabled: bool,
}

impl Entity for GridCard {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn default_cards() -> Vec<GridCard> {
    vec![
        GridCard {
            id: "evidence-aut".to_string(),
            title: "Evidence aut".to_string(),
            description: "Záznam o jízdách služebním autem".to_string(),
            icon: "🚗".to_string(),
            link: "/evidence-aut".to_string(),
            color: "#004990".to_string(),
            order: 1,
            enabled: true,
        },
        GridCard {
            id: "kontakt".to_string(),
            title: "Kontakt".to_string(),
            description: "Kontaktní formulář".to_string(),
            icon: "📧".to_string(),
            link: "/kontakt".to_string(),
            color: "#0072b0".to_string(),
            order: 2,
            enabled: true,
        },
    ]
}

/// The full set of cards, in admin order.
///
/// An unset deck (no file on disk yet) is the default deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardDeck(Vec<GridCard>);

impl Default for CardDeck {
    fn default() -> Self {
        Self(default_cards())
    }
}

impl CardDeck {
    pub fn new(cards: Vec<GridCard>) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[GridCard] {
        &self.0
    }

    /// Enabled cards ordered by `order`; ties keep admin order.
    pub fn enabled_sorted(&self) -> Vec<GridCard> {
        let mut cards: Vec<GridCard> = self.0.iter().filter(|c| c.enabled).cloned().collect();
        cards.sort_by_key(|c| c.order);
        cards
    }

    /// Replace the card with the same id, or append it.
    pub fn upsert(&mut self, card: GridCard) -> DomainResult<()> {
        if card.id.trim().is_empty() {
            return Err(DomainError::validation("Card id is required"));
        }
        match position_by_id(&self.0, &card.id) {
            Some(idx) => self.0[idx] = card,
            None => self.0.push(card),
        }
        Ok(())
    }

    /// Flip `enabled`; returns the new state.
    pub fn toggle(&mut self, id: &str) -> DomainResult<bool> {
        let idx = position_by_id(&self.0, id).ok_or_else(|| DomainError::not_found("Card"))?;
        let card = &mut self.0[idx];
        card.enabled = !card.enabled;
        Ok(card.enabled)
    }

    pub fn remove(&mut self, id: &str) -> DomainResult<GridCard> {
        let idx = position_by_id(&self.0, id).ok_or_else(|| DomainError::not_found("Card"))?;
        Ok(self.0.remove(idx))
    }
}
