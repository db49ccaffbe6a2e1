//! Caption composition and card selection.

use crate::config;
use crate::error::{ArtbotError, Result};
use crate::models::SanitizedCard;
use rand::seq::SliceRandom;
use rand::Rng;

/// A card chosen for posting together with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedCard {
    pub card: SanitizedCard,
    pub caption: String,
}

/// Build the post text for a card.
pub fn compose_caption(card: &SanitizedCard) -> String {
    let artist = match card.artist.as_deref() {
        Some(artist) if !artist.is_empty() => format!("\n\nArtist: {}", artist),
        _ => String::new(),
    };
    format!(
        "{} ({}):\n\n{}{}\n\n{}",
        card.name,
        card.set_name,
        card.flavor_text,
        artist,
        config::HASHTAGS
    )
}

/// Caption length in characters (Unicode scalar values).
pub fn caption_len(caption: &str) -> usize {
    caption.chars().count()
}

/// Pick a random card whose caption fits within `max_len` characters.
///
/// Each card is tried at most once, in random order. Fails with
/// [`ArtbotError::NoFittingCaption`] when none fits or the pool is empty.
pub fn select_post<R: Rng + ?Sized>(
    cards: &[SanitizedCard],
    max_len: usize,
    rng: &mut R,
) -> Result<PostedCard> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.shuffle(rng);

    for (attempt, idx) in order.into_iter().enumerate() {
        let card = &cards[idx];
        let caption = compose_caption(card);
        if caption_len(&caption) <= max_len {
            tracing::info!(card = %card.name, set = %card.set_name, attempt, "selected card");
            return Ok(PostedCard {
                card: card.clone(),
                caption,
            });
        }
        tracing::debug!(card = %card.name, len = caption_len(&caption), "caption too long");
    }

    Err(ArtbotError::NoFittingCaption {
        max_len,
        candidates: cards.len(),
    })
}
