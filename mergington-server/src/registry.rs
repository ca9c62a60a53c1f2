use std::sync::Arc;

use mergington_core::{default_catalog, Activity, Catalog, RegistryError, RegistryResult};
use tokio::sync::RwLock;

/// In-memory store of every activity and its participants.
///
/// Clones share the same underlying catalog. Each mutation holds the write
/// lock across its check and its update, so an email can never be added to
/// the same activity twice even under concurrent requests.
#[derive(Clone)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<Catalog>>,
}

impl ActivityRegistry {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// Snapshot of the whole catalog, in catalog order.
    pub async fn get_all(&self) -> Catalog {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn contains_participant(&self, name: &str, email: &str) -> RegistryResult<bool> {
        let activities = self.activities.read().await;
        let activity = activities
            .get(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;
        Ok(activity.has_participant(email))
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> RegistryResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        tracing::debug!(
            activity = %name,
            participants = activity.participants.len(),
            "Participant added"
        );
        Ok(())
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> RegistryResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::ParticipantNotFound {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::debug!(
            activity = %name,
            participants = activity.participants.len(),
            "Participant removed"
        );
        Ok(())
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}
