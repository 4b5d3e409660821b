use anyhow::Result;

use crate::models::Profile;
use crate::store::Store;

/// The signed-in profile for this run. The active profile persists
/// across restarts until `sign_out` clears it.
pub(crate) struct Session {
    pub profile: Profile,
}

impl Session {
    /// Resume the active profile, fall back to the first known one, or
    /// create a local profile on first run (seeding its categories).
    pub(crate) fn resume_or_create(store: &mut Store) -> Result<Self> {
        if let Some(profile) = store.get_active_profile()? {
            return Ok(Self { profile });
        }

        let profile = match store.get_profiles()?.into_iter().next() {
            Some(p) => p,
            None => {
                let mut p = Profile::new("Local".into(), String::new());
                let id = store.insert_profile(&p)?;
                p.id = Some(id);
                store.seed_default_categories(id)?;
                p
            }
        };

        if let Some(id) = profile.id {
            store.set_active_profile(id)?;
        }
        Ok(Self { profile })
    }

    pub(crate) fn user_id(&self) -> i64 {
        self.profile.id.unwrap_or(0)
    }

    pub(crate) fn sign_out(&self, store: &Store) -> Result<()> {
        store.clear_active_profile()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn first_run_creates_local_profile_with_categories() {
        let mut store = Store::open_in_memory().unwrap();
        let session = Session::resume_or_create(&mut store).unwrap();
        assert_eq!(session.profile.name, "Local");
        assert!(session.user_id() > 0);

        let cats = store.get_categories(session.user_id()).unwrap();
        assert!(!cats.is_empty());
    }

    #[test]
    fn second_run_resumes_the_same_profile() {
        let mut store = Store::open_in_memory().unwrap();
        let first = Session::resume_or_create(&mut store).unwrap();
        let second = Session::resume_or_create(&mut store).unwrap();
        assert_eq!(first.profile.id, second.profile.id);
    }

    #[test]
    fn sign_out_forgets_the_active_profile() {
        let mut store = Store::open_in_memory().unwrap();
        let session = Session::resume_or_create(&mut store).unwrap();
        session.sign_out(&store).unwrap();
        assert!(store.get_active_profile().unwrap().is_none());
    }
}
