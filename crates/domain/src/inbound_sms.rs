/// What an inbound text message asks the system to do with the
/// `Reminder`s of the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundSmsCommand {
    /// Complete and stop every `Reminder` of the sender
    Stop,
    /// Anything else is acknowledged without changing state
    Unrecognized,
}

impl InboundSmsCommand {
    const STOP_KEYWORDS: [&'static str; 2] = ["STOP", "COMPLETED"];

    /// Commands are matched case-insensitively against the whole body
    pub fn parse(body: &str) -> Self {
        let normalized = body.to_uppercase();
        if Self::STOP_KEYWORDS.contains(&normalized.as_str()) {
            Self::Stop
        } else {
            Self::Unrecognized
        }
    }
}
