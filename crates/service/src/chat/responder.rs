use tracing::debug;

use super::domain::{ChatError, ChatMessage};

/// Topic recognised in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Leave,
    Payslip,
    Benefits,
    Help,
    Fallback,
}

/// Keyword rules in priority order; the first rule with any keyword present wins.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Leave, &["leave"]),
    (Intent::Payslip, &["salary", "payslip"]),
    (Intent::Benefits, &["benefits"]),
    (Intent::Help, &["help"]),
];

impl Intent {
    /// Classify free text by case-insensitive substring match.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Fallback)
    }

    pub fn reply(self) -> &'static str {
        match self {
            Intent::Leave => "To apply for leave, please submit a request through the HR portal at least 3 days in advance.",
            Intent::Payslip => "You can access your payslip through the HR portal. Payslips are typically available by the 5th of each month.",
            Intent::Benefits => "Our benefits package includes health insurance, retirement plans, and paid time off. Please check the HR portal for detailed information.",
            Intent::Help => "I can help you with information about leaves, salary, benefits, and general HR policies. What would you like to know?",
            Intent::Fallback => "I'm your HR assistant. I can help you with information about leaves, salary, benefits, and general HR policies. What would you like to know?",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Leave => "leave",
            Intent::Payslip => "payslip",
            Intent::Benefits => "benefits",
            Intent::Help => "help",
            Intent::Fallback => "fallback",
        }
    }
}

/// Reply to a conversation based on its last message.
///
/// # Examples
/// ```
/// use service::chat::{respond, ChatMessage, Intent};
/// let convo = vec![ChatMessage { role: "user".into(), content: "How do I apply for leave?".into() }];
/// assert_eq!(respond(&convo).unwrap(), Intent::Leave.reply());
/// ```
pub fn respond(conversation: &[ChatMessage]) -> Result<&'static str, ChatError> {
    let last = conversation.last().ok_or(ChatError::EmptyConversation)?;
    let intent = Intent::classify(&last.content);
    debug!(intent = intent.as_str(), turns = conversation.len(), "chat_intent");
    Ok(intent.reply())
}
