use sixty_six::RuleViolation;

/// A bot kept playing illegal cards until it ran out of attempts.
///
/// This is the only error the judge reports. It ends the whole run.
#[derive(Debug)]
pub struct RulesNotFollowed {
    pub player: String,
    pub attempts: usize,
    /// The reason the last attempt was rejected.
    pub violation: RuleViolation,
}

impl std::error::Error for RulesNotFollowed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

impl std::fmt::Display for RulesNotFollowed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rules not being followed: {} played {} illegal cards in a row",
            self.player, self.attempts
        )
    }
}
