/// A single update received from the messaging transport
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingUpdate {
    /// Monotonically increasing identifier given by the transport.
    /// Used to acknowledge updates that have been consumed.
    pub update_id: i64,
    /// Not every update carries a message (edits, membership changes ..)
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    /// Stickers, photos and similar messages have no text
    pub text: Option<String>,
}

impl IncomingUpdate {
    pub fn text_message(update_id: i64, chat_id: i64, text: &str) -> Self {
        Self {
            update_id,
            message: Some(IncomingMessage {
                chat_id,
                text: Some(text.to_string()),
            }),
        }
    }
}
