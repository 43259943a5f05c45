use super::AuraResult;
use crate::scoring::AuraLabel;

/// Generic improvement tip for a final score, one per label band.
pub fn free_tip(score: i32) -> &'static str {
    match AuraLabel::for_score(score) {
        AuraLabel::RareEnergy => {
            "Keep doing what you're doing. Consistency is key to maintaining strong energy."
        }
        AuraLabel::StrongPresence => "Focus on activities that align with your natural strengths.",
        AuraLabel::PositiveAura => "Try spending more time on things that calm your mind.",
        AuraLabel::Neutral => {
            "Small daily actions aligned with your goals will boost your presence."
        }
        AuraLabel::LowSignal => {
            "Consider what drains your energy and minimize those interactions."
        }
        AuraLabel::OffEnergy => "Take time to reflect on what truly matters to you.",
        AuraLabel::NegativePresence => {
            "Start with one small change that feels authentic to you."
        }
    }
}

/// Personalized tip built from the generator's first strength and weakness.
pub fn paid_tip(result: &AuraResult) -> String {
    let strength = first_entry(&result.strengths);
    let weakness = first_entry(&result.weaknesses);
    let lower = |entry: Option<&str>, fallback: &str| {
        entry.map_or_else(|| fallback.to_string(), str::to_lowercase)
    };
    let verbatim = |entry: Option<&str>, fallback: &str| entry.unwrap_or(fallback).to_string();

    match AuraLabel::for_score(result.aura_score) {
        AuraLabel::RareEnergy => format!(
            "Your aura is strong, but don't let it make you complacent. {} is your \
             foundation—build on it by addressing {}. People already respect your energy; now \
             make it unforgettable.",
            lower(strength, "Your natural confidence"),
            lower(weakness, "areas where you hold back"),
        ),
        AuraLabel::StrongPresence => format!(
            "You're close to elite energy. {} works in your favor, but {} is holding you back. \
             Focus on showing up with the same intentionality every day. Your aura strengthens \
             when your actions match your potential.",
            verbatim(strength, "Your presence"),
            lower(weakness, "inconsistency"),
        ),
        AuraLabel::PositiveAura => format!(
            "Your aura has potential, but it's not fully realized yet. {} is the main blocker. \
             When you {}, people notice. Do more of that, and cut out anything that feels forced.",
            verbatim(weakness, "Uncertainty in your energy"),
            lower(strength, "lean into your natural strengths"),
        ),
        AuraLabel::Neutral => format!(
            "Your aura is neutral—not bad, but not memorable. The issue isn't what you're doing \
             wrong; it's what you're not doing at all. {} keeps you invisible. Start taking small \
             risks that feel authentic. Your energy will follow.",
            verbatim(weakness, "Playing it safe"),
        ),
        AuraLabel::LowSignal => format!(
            "Your aura weakens when you {}. People sense the disconnect. The fix isn't to try \
             harder—it's to stop trying to be something you're not. {} are when your energy \
             actually works. Lean into those.",
            lower(weakness, "suppress your true self"),
            verbatim(strength, "Your authentic moments"),
        ),
        AuraLabel::OffEnergy => format!(
            "Your aura is actively working against you. {} creates distance instead of \
             connection. This isn't about changing who you are—it's about removing what's fake. \
             People can tell when you're performing. Stop performing. Start being real.",
            verbatim(weakness, "The energy you project"),
        ),
        AuraLabel::NegativePresence => {
            let anchor = match strength {
                Some(strength) => format!(
                    "You have {} going for you—start there.",
                    strength.to_lowercase()
                ),
                None => "Find one thing that feels natural and build from that.".to_string(),
            };
            format!(
                "Your aura is in the red zone. {} is pushing people away. The harsh truth: \
                 you're either trying too hard or not trying at all. {anchor} Everything else \
                 is noise.",
                verbatim(weakness, "The way you show up"),
            )
        }
    }
}

/// First non-empty entry; empty strings count as absent.
fn first_entry(entries: &[String]) -> Option<&str> {
    entries
        .first()
        .map(String::as_str)
        .filter(|entry| !entry.is_empty())
}
