use std::sync::Arc;

use crate::domain::traits::BrainStore;

/// Picks a random brain line as the reply to a triggering message
pub struct Responder {
    brain: Arc<dyn BrainStore>,
    fallback_reply: Option<String>,
}

impl Responder {
    pub fn new(brain: Arc<dyn BrainStore>, fallback_reply: Option<String>) -> Self {
        Self {
            brain,
            fallback_reply,
        }
    }

    /// Reply text for a trigger result. One sample attempt, no retry.
    pub async fn respond(&self, triggered: bool) -> Option<String> {
        if !triggered {
            return None;
        }

        match self.brain.sample().await {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!("Brain unavailable, using fallback reply: {}", e);
                self.fallback_reply.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::FileBrain;

    #[tokio::test]
    async fn test_not_triggered_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let brain = Arc::new(FileBrain::new(dir.path().join("brain.txt")));
        let responder = Responder::new(brain, Some("fallback".to_string()));

        assert_eq!(responder.respond(false).await, None);
    }

    #[tokio::test]
    async fn test_triggered_returns_brain_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brain.txt");
        std::fs::write(&path, "only line\n").unwrap();
        let responder = Responder::new(Arc::new(FileBrain::new(&path)), None);

        assert_eq!(responder.respond(true).await.as_deref(), Some("only line"));
    }

    #[tokio::test]
    async fn test_missing_brain_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let brain = Arc::new(FileBrain::new(dir.path().join("missing.txt")));

        let responder = Responder::new(brain.clone(), Some("Error: Unable to fetch response".to_string()));
        assert_eq!(
            responder.respond(true).await.as_deref(),
            Some("Error: Unable to fetch response")
        );

        let silent = Responder::new(brain, None);
        assert_eq!(silent.respond(true).await, None);
    }
}
