//! Simulated replies
//!
//! Demo mode used when no credential is configured: a canned reply chosen
//! pseudo-randomly from a fixed set of templates, each echoing the user's
//! text. No external service is contacted.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Mutex;

/// Number of reply templates
pub const TEMPLATE_COUNT: usize = 6;

/// Render template `index` for `message`
///
/// Indices wrap around, so any `usize` selects a template.
pub fn render_template(index: usize, message: &str) -> String {
    match index % TEMPLATE_COUNT {
        0 => format!("Thank you for sharing your wellness concern about '{message}'. Let me provide some guidance to help you on your wellness journey..."),
        1 => format!("I understand you're asking about '{message}'. Here are some holistic approaches to support your wellbeing..."),
        2 => format!("Regarding '{message}', wellness is a personal journey. Let me share some insights that might help..."),
        3 => format!("Your question about '{message}' is important for your wellness. Here's what I recommend for a balanced approach..."),
        4 => format!("I appreciate you reaching out about '{message}'. Let's explore some healthy strategies together..."),
        _ => format!("Wellness involves mind, body, and spirit. For your concern about '{message}', here's some guidance..."),
    }
}

/// Every possible simulated reply for `message`, in template order
pub fn all_replies(message: &str) -> Vec<String> {
    (0..TEMPLATE_COUNT)
        .map(|index| render_template(index, message))
        .collect()
}

/// Picks simulated replies using an injectable random source
pub struct SimulatedResponder {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl SimulatedResponder {
    /// Create a responder seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a responder drawing from the given random source
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Create a responder with a fixed seed (deterministic selection)
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Produce a simulated reply echoing `message`
    pub fn respond(&self, message: &str) -> String {
        let index = {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.gen_range(0..TEMPLATE_COUNT)
        };
        tracing::debug!(template = index, "Selected simulated reply template");
        render_template(index, message)
    }
}

impl Default for SimulatedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimulatedResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedResponder").finish_non_exhaustive()
    }
}
