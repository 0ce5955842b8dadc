use copypasta::{ClipboardContext, ClipboardProvider};

/// Somewhere prompt text can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard.
pub struct SystemClipboard {
    inner: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, String> {
        let inner = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.inner
            .set_contents(text.to_string())
            .map_err(|e| format!("Clipboard set error: {}", e))
    }
}
